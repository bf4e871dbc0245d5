//! Restricted flexbox layout algorithm.
//!
//! Tree-agnostic: callers resolve styles into [`FlexItem`]s and a
//! [`FlexContainer`] and get line-local placements back. Reference:
//! <https://www.w3.org/TR/css-flexbox-1/>

// §7 axis mapping
mod axes;
// §4 / §9.2 item inputs and working state
mod items;
// §9.3 collecting items into lines
mod line_breaking;
// §9.7 flexible lengths, §9.5 justify-content
mod main_axis;
// §9.4 cross sizes, §9.6 align-items
mod cross_axis;
// §9.6 align-content
mod align_content;
// §9.3 to §9.6 orchestration
mod container;
// §9.9.1 intrinsic main size
mod intrinsic;
// CSS Position §3 subset, absolutely positioned children
mod absolute;

pub use absolute::{Offsets, PositionedChild, place_positioned};
pub use align_content::{align_content_params, distribute_lines, stretch_lines};
pub use axes::{Direction, LogicalRect, PhysicalRect};
pub use container::{
    AlignContent, AlignItems, FlexContainer, ItemPlacement, JustifyContent, layout_flex_container,
};
pub use cross_axis::{LineCross, align_items_in_line, line_cross_sizes, stack_lines};
pub use intrinsic::{MeasureItem, NaturalSize, max_content_flex_fraction, natural_container_size};
pub use items::{AxisMargins, CrossSize, Element, FlexItem, ItemRef};
pub use line_breaking::{LineRange, break_into_lines};
pub use main_axis::{FlexMode, justify_line, justify_params, resolve_flexible_lengths};

#[cfg(test)]
mod tests;
