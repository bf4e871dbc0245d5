//! Flex items: the per-child inputs and the transient working state of one pass.
//!
//! CSS Flexbox §4 / §9.2. Callers hand in fully resolved numbers; this crate
//! never looks at styles or trees.

/// Opaque handle for an item. The caller decides what it points at.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemRef(pub u64);

/// Margins on one axis, in px.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisMargins {
    /// Margin at the axis start (left for x, top for y).
    pub start: f32,
    /// Margin at the axis end (right for x, bottom for y).
    pub end: f32,
}

impl AxisMargins {
    #[inline]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Combined margin along the axis.
    #[inline]
    pub fn sum(self) -> f32 {
        self.start + self.end
    }
}

/// Cross-size input for an item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CrossSize {
    /// The item has a definite cross size (px, or a percentage already resolved).
    Definite(f32),
    /// The item's cross size is unset. Carries its intrinsic cross size
    /// (0 for leaves); the item is a candidate for `align-items: stretch`.
    Auto(f32),
}

impl CrossSize {
    /// The size used before any stretching.
    #[inline]
    pub const fn raw(self) -> f32 {
        match self {
            Self::Definite(size) | Self::Auto(size) => size,
        }
    }

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto(_))
    }
}

/// Inputs for one in-flow flex item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexItem {
    pub handle: ItemRef,
    /// Flex base size (hypothetical main size before flexing), in px.
    pub flex_base_size: f32,
    /// Flex grow factor (>= 0).
    pub flex_grow: f32,
    /// Flex shrink factor (>= 0).
    pub flex_shrink: f32,
    /// Margins along the container's main axis.
    pub main_margins: AxisMargins,
    /// Margins along the container's cross axis.
    pub cross_margins: AxisMargins,
    pub cross_size: CrossSize,
}

impl FlexItem {
    /// Fixed-size item with no margins and no flexibility.
    #[inline]
    pub const fn fixed(handle: ItemRef, main: f32, cross: f32) -> Self {
        Self {
            handle,
            flex_base_size: main,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            main_margins: AxisMargins::new(0.0, 0.0),
            cross_margins: AxisMargins::new(0.0, 0.0),
            cross_size: CrossSize::Definite(cross),
        }
    }

    /// Base size plus main-axis margins; what the line breaker packs.
    #[inline]
    pub fn hypothetical_outer_main(&self) -> f32 {
        self.flex_base_size + self.main_margins.sum()
    }
}

/// Working state of a single item during one layout pass.
///
/// Elements never outlive the call that created them.
#[derive(Clone, Debug)]
pub struct Element {
    pub item: FlexItem,
    /// Resolved main size after grow/shrink.
    pub main_size: f32,
    /// Offset of the margin box's inner edge from main-start of the line.
    pub main_offset: f32,
    pub cross_size: f32,
    /// Offset from cross-start of the container (line offset included).
    pub cross_offset: f32,
    /// Set once the grow/shrink loop has settled this element's size.
    pub frozen: bool,
}

impl Element {
    #[inline]
    pub fn new(item: FlexItem) -> Self {
        Self {
            main_size: item.flex_base_size,
            cross_size: item.cross_size.raw(),
            item,
            main_offset: 0.0,
            cross_offset: 0.0,
            frozen: false,
        }
    }

    /// Resolved main size plus main-axis margins.
    #[inline]
    pub fn outer_main(&self) -> f32 {
        self.main_size + self.item.main_margins.sum()
    }

    /// Current cross size plus cross-axis margins.
    #[inline]
    pub fn outer_cross(&self) -> f32 {
        self.cross_size + self.item.cross_margins.sum()
    }
}
