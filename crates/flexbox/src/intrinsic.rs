//! Natural (max-content) size of a flex container from its items.
//!
//! CSS Flexbox §9.9.1, restricted to the max-content flex fraction. Used
//! bottom-up for containers whose own size is unset.

use log::debug;

use crate::items::AxisMargins;
use crate::line_breaking::break_into_lines;

/// One item's contribution to its container's natural size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MeasureItem {
    pub flex_base_size: f32,
    /// Max-content main size of the item.
    pub content_size: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub main_margins: AxisMargins,
    /// Cross size plus cross margins.
    pub outer_cross: f32,
}

impl MeasureItem {
    #[inline]
    fn outer_base(&self) -> f32 {
        self.flex_base_size + self.main_margins.sum()
    }
}

/// Natural size along the container's own axes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NaturalSize {
    pub main: f32,
    pub cross: f32,
}

/// Fraction of a flex factor the item needs to reach its content size.
///
/// Positive when the item wants to grow, negative when it wants to shrink,
/// zero when the base already equals the content size or the base is zero.
pub fn max_content_flex_fraction(item: &MeasureItem) -> f32 {
    let diff = item.content_size - item.flex_base_size;
    if diff > 0.0 {
        return diff / item.flex_grow.max(1.0);
    }
    if diff < 0.0 && item.flex_base_size > 0.0 {
        return diff / (item.flex_shrink.max(1.0) * item.flex_base_size);
    }
    0.0
}

/// Natural main size of one line given its chosen flex fraction.
fn line_natural_main(line: &[MeasureItem]) -> f32 {
    let fraction = line
        .iter()
        .map(max_content_flex_fraction)
        .fold(f32::NEG_INFINITY, f32::max);
    let base: f32 = line.iter().map(MeasureItem::outer_base).sum();
    if fraction > 0.0 {
        line.iter()
            .fold(base, |acc, item| item.flex_grow.mul_add(fraction, acc))
    } else if fraction < 0.0 {
        line.iter().fold(base, |acc, item| {
            (item.flex_shrink * item.flex_base_size).mul_add(fraction, acc)
        })
    } else {
        base
    }
}

/// Natural size of a container from its in-flow items.
///
/// Lines only break when the container has a definite main size and wraps;
/// otherwise all items share one line. The natural cross size is the sum of
/// the stacked line cross sizes.
pub fn natural_container_size(
    definite_main: Option<f32>,
    wrap: bool,
    items: &[MeasureItem],
) -> NaturalSize {
    let lines = match definite_main {
        Some(main) if wrap => {
            let outer: Vec<f32> = items.iter().map(MeasureItem::outer_base).collect();
            break_into_lines(&outer, main, true)
        }
        _ => vec![0..items.len()],
    };
    let mut natural = NaturalSize::default();
    for range in lines {
        let line = items.get(range).unwrap_or_default();
        natural.main = natural.main.max(line_natural_main(line));
        natural.cross += line
            .iter()
            .map(|item| item.outer_cross)
            .fold(0.0f32, f32::max);
    }
    debug!(
        target: "flexbox::intrinsic",
        "[FLEX-INTRINSIC] items={} definite_main={definite_main:?} wrap={wrap} natural=({:.3},{:.3})",
        items.len(),
        natural.main,
        natural.cross
    );
    natural
}
