//! Main/cross axis mapping for the two supported flex directions.
//!
//! CSS Flexbox §5.1 (`flex-direction`) restricted to `row` and `column` in a
//! horizontal-tb writing mode: the main axis of a row is x, of a column is y.

/// Direction along which a container distributes its children.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Main axis is horizontal (x), cross axis vertical (y).
    #[default]
    Row,
    /// Main axis is vertical (y), cross axis horizontal (x).
    Column,
}

/// An item rectangle expressed along the container's axes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LogicalRect {
    /// Offset from main-start of the container content box.
    pub main_offset: f32,
    /// Offset from cross-start of the container content box.
    pub cross_offset: f32,
    /// Extent along the main axis.
    pub main_size: f32,
    /// Extent along the cross axis.
    pub cross_size: f32,
}

/// A rectangle in physical coordinates, relative to the container content box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PhysicalRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Direction {
    /// Pick the main-axis extent out of a physical `(width, height)` pair.
    #[inline]
    pub const fn main_extent(self, width: f32, height: f32) -> f32 {
        match self {
            Self::Row => width,
            Self::Column => height,
        }
    }

    /// Pick the cross-axis extent out of a physical `(width, height)` pair.
    #[inline]
    pub const fn cross_extent(self, width: f32, height: f32) -> f32 {
        match self {
            Self::Row => height,
            Self::Column => width,
        }
    }

    /// Build a physical `(width, height)` pair from main and cross extents.
    #[inline]
    pub const fn physical_extents(self, main: f32, cross: f32) -> (f32, f32) {
        match self {
            Self::Row => (main, cross),
            Self::Column => (cross, main),
        }
    }

    /// Translate a line-local logical rectangle into physical coordinates.
    ///
    /// Row maps main to x and cross to y; column maps main to y and cross to x.
    #[inline]
    pub const fn to_physical(self, logical: LogicalRect) -> PhysicalRect {
        match self {
            Self::Row => PhysicalRect {
                x: logical.main_offset,
                y: logical.cross_offset,
                width: logical.main_size,
                height: logical.cross_size,
            },
            Self::Column => PhysicalRect {
                x: logical.cross_offset,
                y: logical.main_offset,
                width: logical.cross_size,
                height: logical.main_size,
            },
        }
    }
}
