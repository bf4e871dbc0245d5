//! Collecting flex items into flex lines (CSS Flexbox §9.3 step 5).

use core::ops::Range;

use log::debug;

/// A line is a contiguous `[start, end)` range of item indices.
pub type LineRange = Range<usize>;

/// Break items into lines by their hypothetical outer main sizes.
///
/// Behavior:
/// - Without `wrap`, every item lands on one line.
/// - With `wrap`, an item starts a new line when the current line already has
///   at least one member and adding it would overflow `container_main`. The
///   first item of a line is always accepted, so an oversized item gets a line
///   of its own instead of producing lines forever.
/// - Zero items still yield exactly one (empty) line.
pub fn break_into_lines(
    outer_sizes: &[f32],
    container_main: f32,
    wrap: bool,
) -> Vec<LineRange> {
    if !wrap {
        return vec![0..outer_sizes.len()];
    }
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0.0f32;
    for (idx, size) in outer_sizes.iter().copied().enumerate() {
        if idx > start && cursor + size > container_main {
            debug!(
                target: "flexbox::lines",
                "[FLEX-LINES] closing line [{start}..{idx}) at main={cursor:.3}; next item {size:.3} overflows {container_main:.3}"
            );
            lines.push(start..idx);
            start = idx;
            cursor = 0.0;
        }
        cursor += size;
    }
    lines.push(start..outer_sizes.len());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if an empty item list does not produce a single empty line.
    fn zero_items_yield_one_empty_line() {
        let lines = break_into_lines(&[], 100.0, true);
        assert_eq!(lines, vec![0..0]);
        let unwrapped = break_into_lines(&[], 100.0, false);
        assert_eq!(unwrapped, vec![0..0]);
    }

    #[test]
    /// # Panics
    /// Panics if items that exactly fill the line are split.
    fn exact_fit_stays_on_one_line() {
        let lines = break_into_lines(&[100.0, 100.0, 100.0], 200.0, true);
        assert_eq!(lines, vec![0..2, 2..3]);
    }

    #[test]
    /// # Panics
    /// Panics if an oversized item is rejected or merged with its neighbours.
    fn oversized_item_gets_its_own_line() {
        let lines = break_into_lines(&[50.0, 500.0, 50.0], 200.0, true);
        assert_eq!(lines, vec![0..1, 1..2, 2..3]);
    }

    #[test]
    /// # Panics
    /// Panics if `wrap = false` breaks lines.
    fn nowrap_keeps_everything_together() {
        let lines = break_into_lines(&[150.0, 150.0, 150.0], 200.0, false);
        assert_eq!(lines, vec![0..3]);
    }
}
