//! Box tree layout with a restricted flexbox.
//!
//! Build a tree of styled boxes in a [`LayoutTree`], call
//! [`LayoutTree::layout`] on the root and read every box's absolute
//! rectangle back with [`LayoutTree::rect`]. Boxes are re-laid-out only
//! when a mutation has marked them dirty.

mod config;
mod error;
mod geometry;
mod snapshot;
mod style;
mod tree;

pub use config::{LayoutConfig, PixelSnap};
pub use error::{LayoutError, StyleError};
pub use geometry::{Edges, Rect, Size};
pub use snapshot::LayoutSnapshot;
pub use style::{
    AlignContent, AlignItems, BoxStyle, Dimension, Display, FlexDirection, Insets,
    JustifyContent, Position, parse_wrap,
};
pub use tree::{BoxId, BoxNode, LayoutTree};
