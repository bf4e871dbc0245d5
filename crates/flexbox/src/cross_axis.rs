//! Cross-axis sizing of lines and `align-items` within a line.
//!
//! CSS Flexbox §9.4 (cross size determination) and §9.6 (`align-items`).

use log::trace;

use crate::container::AlignItems;
use crate::items::Element;
use crate::line_breaking::LineRange;

/// Per-line cross geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineCross {
    /// Resolved cross size of the line band.
    pub size: f32,
    /// Offset of the band from cross-start of the container.
    pub offset: f32,
}

/// Compute each line's cross size.
///
/// A single-line container's line is exactly as tall as the container. With
/// several lines each line takes the largest outer cross size of its members.
pub fn line_cross_sizes(
    elements: &[Element],
    lines: &[LineRange],
    container_cross: f32,
) -> Vec<LineCross> {
    if lines.len() == 1 {
        return vec![LineCross {
            size: container_cross,
            offset: 0.0,
        }];
    }
    lines
        .iter()
        .map(|range| {
            let size = elements
                .get(range.clone())
                .unwrap_or_default()
                .iter()
                .map(Element::outer_cross)
                .fold(0.0f32, f32::max);
            LineCross { size, offset: 0.0 }
        })
        .collect()
}

/// Stack lines one after another along the cross axis, starting at `start`.
pub fn stack_lines(lines: &mut [LineCross], start: f32) {
    let mut cursor = start;
    for line in lines.iter_mut() {
        line.offset = cursor;
        cursor += line.size;
    }
}

/// Size and position every element of a line along the cross axis.
///
/// Behavior:
/// - `Stretch` expands elements without a definite cross size to the line's
///   cross size minus their cross margins; definite ones stay at the start.
/// - `Start`, `End` and `Center` keep the element's size and place its margin
///   box at the start, end or middle of the band.
pub fn align_items_in_line(line_elements: &mut [Element], line: LineCross, align: AlignItems) {
    for element in line_elements.iter_mut() {
        let margins = element.item.cross_margins;
        if matches!(align, AlignItems::Stretch) && element.item.cross_size.is_auto() {
            element.cross_size = (line.size - margins.sum()).max(0.0);
        }
        let free = line.size - element.outer_cross();
        let within = match align {
            AlignItems::Stretch | AlignItems::Start => 0.0,
            AlignItems::End => free,
            AlignItems::Center => free * 0.5,
        };
        element.cross_offset = line.offset + margins.start + within;
        trace!(
            target: "flexbox::cross_axis",
            "[FLEX-ALIGN-ITEMS] {:?} align={align:?} line=({:.3},{:.3}) size={:.3} offset={:.3}",
            element.item.handle,
            line.offset,
            line.size,
            element.cross_size,
            element.cross_offset
        );
    }
}
