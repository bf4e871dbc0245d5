//! Main-axis sizing and justification.
//!
//! CSS Flexbox §9.7 (resolving flexible lengths) and §9.5 (`justify-content`).

use log::{debug, trace};

use crate::container::JustifyContent;
use crate::items::Element;

/// Whether a line distributes positive or negative free space.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FlexMode {
    Growing,
    Shrinking,
}

impl FlexMode {
    /// The factor that applies to `element` in this mode.
    #[inline]
    fn factor(self, element: &Element) -> f32 {
        match self {
            Self::Growing => element.item.flex_grow,
            Self::Shrinking => element.item.flex_shrink,
        }
    }
}

/// Resolve each element's main size within one line.
///
/// Behavior:
/// - The line grows when its hypothetical outer size is strictly below
///   `container_main`, otherwise it shrinks.
/// - Elements whose relevant factor is zero are frozen at their base size.
/// - Every round distributes the remaining free space over the unfrozen
///   elements in proportion to grow (or to `shrink × base` when shrinking).
///   When the unfrozen factors sum below one, only that fraction of the
///   initial free space is handed out.
/// - A shrink that would drive a size negative clamps it to zero and freezes
///   only the violators; the remaining elements are redistributed next round.
///   Without violations every element freezes, so the loop ends after at most
///   one round per element.
pub fn resolve_flexible_lengths(line: &mut [Element], container_main: f32) -> FlexMode {
    let hypothetical: f32 = line
        .iter()
        .map(|element| element.item.hypothetical_outer_main())
        .sum();
    let mode = if hypothetical < container_main {
        FlexMode::Growing
    } else {
        FlexMode::Shrinking
    };
    for element in line.iter_mut() {
        element.main_size = element.item.flex_base_size;
        element.frozen = mode.factor(element) <= 0.0;
    }
    let initial_free = container_main - hypothetical;
    debug!(
        target: "flexbox::main_axis",
        "[FLEX-RESOLVE] items={} mode={mode:?} hypothetical={hypothetical:.3} container_main={container_main:.3} initial_free={initial_free:.3}",
        line.len()
    );

    for round in 0..line.len() {
        if line.iter().all(|element| element.frozen) {
            break;
        }
        let remaining = distributable_space(line, container_main, initial_free, mode);
        trace!(
            target: "flexbox::main_axis",
            "[FLEX-RESOLVE] round={round} remaining={remaining:.3}"
        );
        let distributed = match mode {
            FlexMode::Growing => distribute_grow(line, remaining),
            FlexMode::Shrinking => distribute_shrink(line, remaining),
        };
        if !distributed || !freeze_violations(line) {
            for element in line.iter_mut() {
                element.frozen = true;
            }
        }
    }
    mode
}

/// Free space still to hand out: the container minus frozen sizes and
/// unfrozen bases, clamped when the unfrozen factors sum below one.
fn distributable_space(
    line: &[Element],
    container_main: f32,
    initial_free: f32,
    mode: FlexMode,
) -> f32 {
    let mut used = 0.0f32;
    let mut factor_sum = 0.0f32;
    for element in line {
        if element.frozen {
            used += element.outer_main();
        } else {
            used += element.item.hypothetical_outer_main();
            factor_sum += mode.factor(element);
        }
    }
    let remaining = container_main - used;
    if factor_sum < 1.0 {
        let scaled = initial_free * factor_sum;
        if scaled.abs() < remaining.abs() {
            return scaled;
        }
    }
    remaining
}

/// Hand `remaining` (positive) to unfrozen elements by grow factor.
/// Returns false when nothing could be distributed.
fn distribute_grow(line: &mut [Element], remaining: f32) -> bool {
    let total: f32 = line
        .iter()
        .filter(|element| !element.frozen)
        .map(|element| element.item.flex_grow)
        .sum();
    if total <= 0.0 || remaining <= 0.0 {
        return false;
    }
    for element in line.iter_mut().filter(|element| !element.frozen) {
        let share = element.item.flex_grow / total * remaining;
        element.main_size = element.item.flex_base_size + share;
    }
    true
}

/// Take `|remaining|` away from unfrozen elements by scaled shrink factor.
/// Returns false when nothing could be distributed.
fn distribute_shrink(line: &mut [Element], remaining: f32) -> bool {
    let deficit = (-remaining).max(0.0);
    let total_scaled: f32 = line
        .iter()
        .filter(|element| !element.frozen)
        .map(|element| element.item.flex_shrink * element.item.flex_base_size)
        .sum();
    if total_scaled <= 0.0 || deficit <= 0.0 {
        return false;
    }
    for element in line.iter_mut().filter(|element| !element.frozen) {
        let scaled = element.item.flex_shrink * element.item.flex_base_size;
        let share = scaled / total_scaled * deficit;
        element.main_size = element.item.flex_base_size - share;
    }
    true
}

/// Clamp negative sizes to zero and freeze just those elements.
/// Returns true when at least one element was clamped.
fn freeze_violations(line: &mut [Element]) -> bool {
    let mut violated = false;
    for element in line.iter_mut().filter(|element| !element.frozen) {
        if element.main_size < 0.0 {
            element.main_size = 0.0;
            element.frozen = true;
            violated = true;
        }
    }
    violated
}

/// Compute the leading offset and the between-item spacing for `justify-content`.
///
/// `leftover` may be negative when the line overflows; `Start`, `End` and
/// `Center` honour it as-is, the space-distribution modes pack at the start.
/// `SpaceBetween` with fewer than two items has no gaps to fill and keeps
/// zero spacing.
pub fn justify_params(justify: JustifyContent, leftover: f32, count: usize) -> (f32, f32) {
    let positive = leftover.max(0.0);
    match (justify, count) {
        (JustifyContent::End, _) => (leftover, 0.0),
        (JustifyContent::Center, _) => (leftover * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, positive / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            let spacing = positive / count as f32;
            (spacing * 0.5, spacing)
        }
        _ => (0.0, 0.0),
    }
}

/// Position the elements of one line along the main axis.
pub fn justify_line(line: &mut [Element], container_main: f32, justify: JustifyContent) {
    let used: f32 = line.iter().map(Element::outer_main).sum();
    let leftover = container_main - used;
    let (start, between) = justify_params(justify, leftover, line.len());
    debug!(
        target: "flexbox::main_axis",
        "[FLEX-JUSTIFY] justify={justify:?} used={used:.3} leftover={leftover:.3} start={start:.3} between={between:.3}"
    );
    let mut cursor = start;
    for element in line.iter_mut() {
        element.main_offset = cursor + element.item.main_margins.start;
        cursor += element.outer_main() + between;
    }
}
