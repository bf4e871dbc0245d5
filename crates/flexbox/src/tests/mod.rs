//! Tests for multi-line flex layout and intrinsic sizing.

use super::*;

mod cross_alignment_tests;
mod intrinsic_tests;
mod multi_line_tests;

/// Install a test logger once; later calls are no-ops.
#[inline]
pub fn init_logging() {
    let _logger = env_logger::builder().is_test(true).try_init();
}

/// Helper to create a fixed item with zero margins.
#[inline]
pub fn item_fixed(handle: u64, main: f32, cross: f32) -> FlexItem {
    FlexItem::fixed(ItemRef(handle), main, cross)
}

/// Helper to create a row container with start alignment on every axis.
#[inline]
pub fn container(main_size: f32, cross_size: f32) -> FlexContainer {
    FlexContainer {
        main_size,
        cross_size,
        wrap: false,
        justify_content: JustifyContent::Start,
        align_items: AlignItems::Start,
        align_content: AlignContent::Start,
    }
}

/// Look up a placement by handle.
#[inline]
pub fn placement_of(out: &[ItemPlacement], handle: u64) -> Option<ItemPlacement> {
    out.iter()
        .copied()
        .find(|placement| placement.handle == ItemRef(handle))
}
