//! Distribution of flex lines along the cross axis (`align-content`, CSS Flexbox §9.6 step 16).

use log::debug;

use crate::container::AlignContent;
use crate::cross_axis::{LineCross, stack_lines};

/// Grow every line evenly when `align-content: stretch` leaves room.
///
/// Later lines shift by the growth of the earlier ones, so the stack is
/// restacked from the top afterwards.
pub fn stretch_lines(lines: &mut [LineCross], container_cross: f32) {
    let total: f32 = lines.iter().map(|line| line.size).sum();
    if lines.is_empty() || total >= container_cross {
        return;
    }
    let add_each = (container_cross - total) / lines.len() as f32;
    debug!(
        target: "flexbox::cross_axis",
        "[ALIGN-CONTENT] stretch: lines={} total={total:.3} container_cross={container_cross:.3} add_each={add_each:.3}",
        lines.len()
    );
    for line in lines.iter_mut() {
        line.size += add_each;
    }
    stack_lines(lines, 0.0);
}

/// Compute the leading offset and between-line spacing for non-stretch `align-content`.
///
/// Mirrors `justify-content` over lines instead of items. Only positive
/// leftover space is distributed.
pub fn align_content_params(align: AlignContent, leftover: f32, line_count: usize) -> (f32, f32) {
    if leftover <= 0.0 {
        return (0.0, 0.0);
    }
    match (align, line_count) {
        (AlignContent::End, _) => (leftover, 0.0),
        (AlignContent::Center, _) => (leftover * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 => (0.0, leftover / (count as f32 - 1.0)),
        (AlignContent::SpaceAround, count) if count > 0 => {
            let spacing = leftover / count as f32;
            (spacing * 0.5, spacing)
        }
        _ => (0.0, 0.0),
    }
}

/// Apply `align-content` to stacked lines, returning the net shift of each line.
pub fn distribute_lines(
    lines: &mut [LineCross],
    container_cross: f32,
    align: AlignContent,
) -> Vec<f32> {
    if matches!(align, AlignContent::Stretch) {
        stretch_lines(lines, container_cross);
        return vec![0.0; lines.len()];
    }
    let total: f32 = lines.iter().map(|line| line.size).sum();
    let (start, between) = align_content_params(align, container_cross - total, lines.len());
    debug!(
        target: "flexbox::cross_axis",
        "[ALIGN-CONTENT] mode={align:?} container_cross={container_cross:.3} lines_total={total:.3} start={start:.3} between={between:.3}"
    );
    let mut shift = start;
    let mut shifts = Vec::with_capacity(lines.len());
    for line in lines.iter_mut() {
        line.offset += shift;
        shifts.push(shift);
        shift += between;
    }
    shifts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_lines() -> Vec<LineCross> {
        let mut lines = vec![
            LineCross {
                size: 20.0,
                offset: 0.0,
            };
            3
        ];
        stack_lines(&mut lines, 0.0);
        lines
    }

    #[test]
    /// # Panics
    /// Panics if stretch does not split the leftover evenly and restack lines.
    fn stretch_grows_and_shifts_lines() {
        let mut lines = three_lines();
        distribute_lines(&mut lines, 90.0, AlignContent::Stretch);
        let expected = [(0.0, 30.0), (30.0, 30.0), (60.0, 30.0)];
        for (line, (offset, size)) in lines.iter().zip(expected) {
            assert!((line.offset - offset).abs() < 0.001);
            assert!((line.size - size).abs() < 0.001);
        }
    }

    #[test]
    /// # Panics
    /// Panics if space-between does not pin the first and last line to the edges.
    fn space_between_pins_edges() {
        let mut lines = three_lines();
        let shifts = distribute_lines(&mut lines, 100.0, AlignContent::SpaceBetween);
        assert_eq!(shifts.len(), 3);
        let offsets: Vec<f32> = lines.iter().map(|line| line.offset).collect();
        let expected = [0.0, 40.0, 80.0];
        for (got, want) in offsets.iter().zip(expected) {
            assert!((got - want).abs() < 0.001, "got {got} want {want}");
        }
    }

    #[test]
    /// # Panics
    /// Panics if overflowing lines are moved by a distribution mode.
    fn no_shift_without_leftover() {
        let (start, between) = align_content_params(AlignContent::Center, -10.0, 2);
        assert!(start.abs() < 0.001 && between.abs() < 0.001);
        let (single_start, single_between) =
            align_content_params(AlignContent::SpaceBetween, 50.0, 1);
        assert!(single_start.abs() < 0.001 && single_between.abs() < 0.001);
    }
}
