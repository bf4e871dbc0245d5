//! Bottom-up natural sizes.
//!
//! Nested auto-sized containers must know how big their content is before
//! their parent can size them, so measuring walks leaves first.

use flexbox::{MeasureItem, natural_container_size};
use indextree::NodeId;
use log::trace;
use smallvec::SmallVec;

use super::pass::flex_direction;
use super::{LayoutTree, along, axis_margins};
use crate::geometry::Size;
use crate::style::BoxStyle;

impl LayoutTree {
    /// Store the natural size of `node` and every displayed descendant, returning `node`'s.
    ///
    /// Px dimensions are taken as-is; everything else comes from the in-flow
    /// children. Percentages cannot resolve here and count as auto.
    pub(super) fn measure_subtree(&mut self, node: NodeId) -> Size {
        let Some(style) = self.style_of(node) else {
            return Size::default();
        };
        let children: SmallVec<NodeId, 8> = node.children(&self.arena).collect();
        let mut items: SmallVec<MeasureItem, 8> = SmallVec::new();
        for child in children {
            let Some(child_style) = self.style_of(child) else {
                continue;
            };
            if !child_style.is_displayed() {
                continue;
            }
            let natural = self.measure_subtree(child);
            if !child_style.is_absolute() {
                items.push(measure_item(&style, &child_style, natural));
            }
        }

        let direction = flex_direction(style.direction);
        let own_width = style.width.resolve(None);
        let own_height = style.height.resolve(None);
        let (definite_main, _) = along(direction, own_width, own_height);
        let content = natural_container_size(definite_main, style.wrap, &items);
        let (content_width, content_height) =
            direction.physical_extents(content.main, content.cross);
        let natural = Size::new(
            own_width.unwrap_or(content_width),
            own_height.unwrap_or(content_height),
        );
        trace!(
            target: "flexlayout::pass",
            "[MEASURE] {node:?} items={} natural=({:.3},{:.3})",
            items.len(),
            natural.width,
            natural.height
        );
        if let Some(entry) = self.arena.get_mut(node) {
            entry.get_mut().natural = natural;
        }
        natural
    }
}

/// A child's contribution to its parent's natural size.
///
/// An unset main size contributes the child's natural size as content; the
/// base is zero for growing children so the parent's flex fraction recovers it.
fn measure_item(parent: &BoxStyle, child: &BoxStyle, natural: Size) -> MeasureItem {
    let direction = flex_direction(parent.direction);
    let width = child.width.resolve(parent.width.resolve(None));
    let height = child.height.resolve(parent.height.resolve(None));
    let (main_size, cross_size) = along(direction, width, height);
    let (natural_main, natural_cross) = along(direction, natural.width, natural.height);
    let (main_margins, cross_margins) = axis_margins(direction, child.margin);
    let unset_base = if child.grow > 0.0 { 0.0 } else { natural_main };
    MeasureItem {
        flex_base_size: main_size.unwrap_or(unset_base),
        content_size: main_size.unwrap_or(natural_main),
        flex_grow: child.grow,
        flex_shrink: child.shrink,
        main_margins,
        outer_cross: cross_size.unwrap_or(natural_cross) + cross_margins.sum(),
    }
}
