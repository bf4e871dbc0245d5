//! Error types for style conversion, tree operations and layout passes.

use thiserror::Error;

use crate::tree::BoxId;

/// A style value could not be converted into one of the style enums.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("unknown {property}: {value}")]
    UnknownKeyword {
        property: &'static str,
        value: String,
    },
    #[error("unknown {property} discriminant: {value}")]
    UnknownDiscriminant { property: &'static str, value: u8 },
}

/// Errors surfaced by [`crate::LayoutTree`].
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("box {0:?} does not exist or was removed")]
    UnknownBox(BoxId),

    #[error("box {child:?} already has a parent")]
    AlreadyAttached { child: BoxId },

    #[error("attaching box {child:?} under {parent:?} would create a cycle")]
    CyclicAttach { parent: BoxId, child: BoxId },

    #[error("box {0:?} has a parent; only layout roots can be resized")]
    NotRoot(BoxId),

    #[error("{factor} must be a finite non-negative number, got {value}")]
    InvalidFlexFactor { factor: &'static str, value: f32 },

    #[error("{field} must be a finite length, got {value}")]
    InvalidLength { field: &'static str, value: f32 },

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
}
