//! Flex container inputs and the multi-line layout entry point.
//!
//! Ties together line breaking, flexible lengths, line stacking and both
//! alignment axes (CSS Flexbox §9.3 to §9.6).

use log::debug;

use crate::align_content::distribute_lines;
use crate::axes::LogicalRect;
use crate::cross_axis::{align_items_in_line, line_cross_sizes, stack_lines};
use crate::items::{Element, FlexItem, ItemRef};
use crate::line_breaking::break_into_lines;
use crate::main_axis::{justify_line, resolve_flexible_lengths};

/// Main-axis distribution of free space within a line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
}

/// Cross-axis placement of items within their line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    #[default]
    Stretch,
    Start,
    End,
    Center,
}

/// Cross-axis distribution of lines within the container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignContent {
    #[default]
    Start,
    End,
    Center,
    Stretch,
    SpaceBetween,
    SpaceAround,
}

/// Resolved container inputs, expressed along the container's own axes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexContainer {
    /// Inner main size of the container (content box), in px.
    pub main_size: f32,
    /// Inner cross size of the container (content box), in px.
    pub cross_size: f32,
    pub wrap: bool,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
}

/// Final line-local placement of one item, relative to the container's content box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemPlacement {
    pub handle: ItemRef,
    pub main_offset: f32,
    pub main_size: f32,
    pub cross_offset: f32,
    pub cross_size: f32,
}

impl ItemPlacement {
    #[inline]
    pub const fn logical(&self) -> LogicalRect {
        LogicalRect {
            main_offset: self.main_offset,
            cross_offset: self.cross_offset,
            main_size: self.main_size,
            cross_size: self.cross_size,
        }
    }
}

impl From<&Element> for ItemPlacement {
    #[inline]
    fn from(element: &Element) -> Self {
        Self {
            handle: element.item.handle,
            main_offset: element.main_offset,
            main_size: element.main_size,
            cross_offset: element.cross_offset,
            cross_size: element.cross_size,
        }
    }
}

/// Lay out in-flow items inside a flex container.
///
/// Behavior:
/// - Items are broken into lines by their hypothetical outer main sizes.
/// - Each line resolves flexible lengths and is justified on its own.
/// - Line cross sizes are computed, stacked, then distributed by
///   `align-content`; items are finally aligned within their line.
///
/// Placements come back in input order.
pub fn layout_flex_container(container: &FlexContainer, items: &[FlexItem]) -> Vec<ItemPlacement> {
    let mut elements: Vec<Element> = items.iter().copied().map(Element::new).collect();
    let outer_sizes: Vec<f32> = items.iter().map(FlexItem::hypothetical_outer_main).collect();
    let lines = break_into_lines(&outer_sizes, container.main_size, container.wrap);
    debug!(
        target: "flexbox::container",
        "[FLEX-CONTAINER] items={} lines={} main={:.3} cross={:.3} wrap={}",
        items.len(),
        lines.len(),
        container.main_size,
        container.cross_size,
        container.wrap
    );

    for range in &lines {
        if let Some(line) = elements.get_mut(range.clone()) {
            resolve_flexible_lengths(line, container.main_size);
            justify_line(line, container.main_size, container.justify_content);
        }
    }

    let mut line_cross = line_cross_sizes(&elements, &lines, container.cross_size);
    stack_lines(&mut line_cross, 0.0);
    distribute_lines(&mut line_cross, container.cross_size, container.align_content);

    for (range, line) in lines.iter().zip(line_cross.iter().copied()) {
        if let Some(line_elements) = elements.get_mut(range.clone()) {
            align_items_in_line(line_elements, line, container.align_items);
        }
    }

    elements.iter().map(ItemPlacement::from).collect()
}
