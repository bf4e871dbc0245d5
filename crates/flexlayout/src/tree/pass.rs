//! The layout pass: validate, measure bottom-up, then place top-down.

use flexbox::{
    AlignContent as FlexAlignContent, AlignItems as FlexAlignItems, CrossSize, Direction,
    FlexContainer, FlexItem, ItemRef, JustifyContent as FlexJustify, Offsets, PositionedChild,
    layout_flex_container, place_positioned,
};
use indextree::NodeId;
use log::{debug, trace};
use smallvec::SmallVec;

use super::{BoxId, LayoutTree, along, axis_margins};
use crate::error::LayoutError;
use crate::geometry::{Rect, Size};
use crate::style::{AlignContent, AlignItems, BoxStyle, FlexDirection, JustifyContent};

/// A displayed child collected for placement.
struct Child {
    node: NodeId,
    style: BoxStyle,
    natural: Size,
}

impl LayoutTree {
    /// Lay out `node` if it is dirty.
    ///
    /// A clean box is not recomputed; the call only descends to dirty
    /// descendants and lays each of them out inside its last rectangle.
    /// A child that was never placed has no rectangle to reuse, so the pass
    /// starts from its nearest placed ancestor, or the tree root, instead.
    ///
    /// # Errors
    /// - [`LayoutError::UnknownBox`] for stale handles.
    /// - [`LayoutError::InvalidFlexFactor`] or [`LayoutError::InvalidLength`]
    ///   when a style in the recomputed subtree is invalid. Nothing is
    ///   written and the subtree stays dirty.
    pub fn layout(&mut self, node: BoxId) -> Result<(), LayoutError> {
        self.entry(node)?;
        let start = self.pass_start(node.0);
        if self.arena.get(start).is_some_and(|entry| entry.get().dirty) {
            return self.run_pass(start);
        }
        debug!(target: "flexlayout::pass", "[LAYOUT] {start:?} clean, checking descendants");
        self.layout_clean(start)
    }

    /// Lay out `node` and its subtree whether or not it is dirty.
    ///
    /// An unplaced child is redirected the same way as in [`Self::layout`].
    ///
    /// # Errors
    /// Same as [`Self::layout`].
    pub fn layout_forced(&mut self, node: BoxId) -> Result<(), LayoutError> {
        self.entry(node)?;
        let start = self.pass_start(node.0);
        self.run_pass(start)
    }

    /// First box, from `node` upward, that is a root or already has a rectangle.
    fn pass_start(&self, node: NodeId) -> NodeId {
        let start = node
            .ancestors(&self.arena)
            .find(|id| {
                self.arena
                    .get(*id)
                    .is_some_and(|entry| entry.parent().is_none() || entry.get().rect.is_some())
            })
            .unwrap_or(node);
        if start != node {
            debug!(
                target: "flexlayout::pass",
                "[LAYOUT] {node:?} was never placed, starting from {start:?}"
            );
        }
        start
    }

    fn layout_clean(&mut self, node: NodeId) -> Result<(), LayoutError> {
        let children: SmallVec<NodeId, 8> = node.children(&self.arena).collect();
        for child in children {
            let Some(entry) = self.arena.get(child) else {
                continue;
            };
            let data = entry.get();
            if !data.style.is_displayed() {
                continue;
            }
            if data.dirty {
                self.run_pass(child)?;
            } else {
                self.layout_clean(child)?;
            }
        }
        Ok(())
    }

    fn run_pass(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.validate_subtree(node)?;
        let displayed = self
            .style_of(node)
            .is_some_and(|style| style.is_displayed());
        if displayed {
            let passes_before = self.pass_count;
            self.measure_subtree(node);
            let frame = self.frame_of(node);
            let committed = self.commit(node, frame);
            self.place_children(node, committed);
            debug!(
                target: "flexlayout::pass",
                "[LAYOUT-PASS] {node:?} frame=({:.3},{:.3},{:.3},{:.3}) containers={}",
                committed.x,
                committed.y,
                committed.width,
                committed.height,
                self.pass_count - passes_before
            );
        }
        let subtree: Vec<NodeId> = node.descendants(&self.arena).collect();
        for id in subtree {
            if let Some(entry) = self.arena.get_mut(id) {
                entry.get_mut().dirty = false;
            }
        }
        Ok(())
    }

    /// Reject invalid styles anywhere in the subtree before anything is written.
    fn validate_subtree(&self, node: NodeId) -> Result<(), LayoutError> {
        for id in node.descendants(&self.arena) {
            if let Some(style) = self.style_of(id) {
                validate_style(&style)?;
            }
        }
        Ok(())
    }

    /// Rectangle a pass over `node` starts from.
    ///
    /// A box that was already placed inside a parent keeps that rectangle.
    /// A root is placed at its `left`/`top` insets with its px size, falling
    /// back to the natural size (percentages have nothing to resolve against).
    fn frame_of(&self, node: NodeId) -> Rect {
        let Some(entry) = self.arena.get(node) else {
            return Rect::default();
        };
        let data = entry.get();
        if let Some(rect) = data.rect.filter(|_| entry.parent().is_some()) {
            return rect;
        }
        Rect::new(
            data.style.insets.left.unwrap_or(0.0),
            data.style.insets.top.unwrap_or(0.0),
            data.natural.width,
            data.natural.height,
        )
    }

    fn commit(&mut self, node: NodeId, rect: Rect) -> Rect {
        let snapped = self.config.pixel_snap.snap_rect(rect);
        if let Some(entry) = self.arena.get_mut(node) {
            entry.get_mut().rect = Some(snapped);
        }
        trace!(
            target: "flexlayout::pass",
            "[COMMIT] {node:?} ({:.3},{:.3},{:.3},{:.3})",
            snapped.x,
            snapped.y,
            snapped.width,
            snapped.height
        );
        snapped
    }

    /// Place the displayed children of `node` inside `frame`, then recurse.
    fn place_children(&mut self, node: NodeId, frame: Rect) {
        let Some(style) = self.style_of(node) else {
            return;
        };
        self.pass_count += 1;
        let mut flow: SmallVec<Child, 8> = SmallVec::new();
        let mut positioned: SmallVec<Child, 4> = SmallVec::new();
        for child in node.children(&self.arena) {
            let Some(entry) = self.arena.get(child) else {
                continue;
            };
            let data = entry.get();
            if !data.style.is_displayed() {
                continue;
            }
            let collected = Child {
                node: child,
                style: data.style,
                natural: data.natural,
            };
            if data.style.is_absolute() {
                positioned.push(collected);
            } else {
                flow.push(collected);
            }
        }

        let direction = flex_direction(style.direction);
        let (main_size, cross_size) = along(direction, frame.width, frame.height);
        let container = FlexContainer {
            main_size,
            cross_size,
            wrap: style.wrap,
            justify_content: flex_justify(style.justify_content),
            align_items: flex_align_items(style.align_items),
            align_content: flex_align_content(style.align_content),
        };
        let items: SmallVec<FlexItem, 8> = flow
            .iter()
            .enumerate()
            .map(|(index, child)| flex_item(index, frame, direction, child))
            .collect();

        let mut placed: SmallVec<(NodeId, Rect), 8> = SmallVec::new();
        for placement in layout_flex_container(&container, &items) {
            let Some(child) = flow.get(placement.handle.0 as usize) else {
                continue;
            };
            let local = direction.to_physical(placement.logical());
            let rect = Rect::new(local.x, local.y, local.width, local.height)
                .translated(frame.x, frame.y);
            placed.push((child.node, self.commit(child.node, rect)));
        }
        for child in &positioned {
            let request = PositionedChild {
                offsets: Offsets {
                    left: child.style.insets.left,
                    top: child.style.insets.top,
                    right: child.style.insets.right,
                    bottom: child.style.insets.bottom,
                },
                width: child.style.width.resolve(Some(frame.width)),
                height: child.style.height.resolve(Some(frame.height)),
                natural_width: child.natural.width,
                natural_height: child.natural.height,
            };
            let local = place_positioned(frame.width, frame.height, &request);
            let rect = Rect::new(local.x, local.y, local.width, local.height)
                .translated(frame.x, frame.y);
            placed.push((child.node, self.commit(child.node, rect)));
        }
        debug!(
            target: "flexlayout::pass",
            "[LAYOUT-CHILDREN] {node:?} flow={} absolute={} direction={direction:?}",
            flow.len(),
            positioned.len()
        );

        for (child, rect) in placed {
            self.place_children(child, rect);
        }
    }
}

/// Flex inputs for an in-flow child of a container laid out in `frame`.
///
/// Percent sizes resolve against the container's content box on the same
/// physical axis. An unset main size uses the child's natural size, except
/// that growing children start from zero.
fn flex_item(index: usize, frame: Rect, direction: Direction, child: &Child) -> FlexItem {
    let style = &child.style;
    let width = style.width.resolve(Some(frame.width));
    let height = style.height.resolve(Some(frame.height));
    let (main_size, cross_size) = along(direction, width, height);
    let (natural_main, natural_cross) = along(direction, child.natural.width, child.natural.height);
    let (main_margins, cross_margins) = axis_margins(direction, style.margin);
    let unset_base = if style.grow > 0.0 { 0.0 } else { natural_main };
    FlexItem {
        handle: ItemRef(index as u64),
        flex_base_size: main_size.unwrap_or(unset_base),
        flex_grow: style.grow,
        flex_shrink: style.shrink,
        main_margins,
        cross_margins,
        cross_size: cross_size.map_or(CrossSize::Auto(natural_cross), CrossSize::Definite),
    }
}

fn validate_style(style: &BoxStyle) -> Result<(), LayoutError> {
    for (factor, value) in [("grow", style.grow), ("shrink", style.shrink)] {
        if !value.is_finite() || value < 0.0 {
            return Err(LayoutError::InvalidFlexFactor { factor, value });
        }
    }
    for (field, dimension) in [("width", style.width), ("height", style.height)] {
        if let Some(value) = dimension
            .value()
            .filter(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(LayoutError::InvalidLength { field, value });
        }
    }
    let margin = style.margin;
    let insets = style.insets;
    let offsets = [
        ("margin-top", Some(margin.top)),
        ("margin-right", Some(margin.right)),
        ("margin-bottom", Some(margin.bottom)),
        ("margin-left", Some(margin.left)),
        ("left", insets.left),
        ("top", insets.top),
        ("right", insets.right),
        ("bottom", insets.bottom),
    ];
    for (field, offset) in offsets {
        if let Some(value) = offset.filter(|value| !value.is_finite()) {
            return Err(LayoutError::InvalidLength { field, value });
        }
    }
    Ok(())
}

pub(super) const fn flex_direction(direction: FlexDirection) -> Direction {
    match direction {
        FlexDirection::Row => Direction::Row,
        FlexDirection::Column => Direction::Column,
    }
}

const fn flex_justify(justify: JustifyContent) -> FlexJustify {
    match justify {
        JustifyContent::Start => FlexJustify::Start,
        JustifyContent::End => FlexJustify::End,
        JustifyContent::Center => FlexJustify::Center,
        JustifyContent::SpaceBetween => FlexJustify::SpaceBetween,
        JustifyContent::SpaceAround => FlexJustify::SpaceAround,
    }
}

const fn flex_align_items(align: AlignItems) -> FlexAlignItems {
    match align {
        AlignItems::Stretch => FlexAlignItems::Stretch,
        AlignItems::Start => FlexAlignItems::Start,
        AlignItems::End => FlexAlignItems::End,
        AlignItems::Center => FlexAlignItems::Center,
    }
}

const fn flex_align_content(align: AlignContent) -> FlexAlignContent {
    match align {
        AlignContent::Start => FlexAlignContent::Start,
        AlignContent::End => FlexAlignContent::End,
        AlignContent::Center => FlexAlignContent::Center,
        AlignContent::Stretch => FlexAlignContent::Stretch,
        AlignContent::SpaceBetween => FlexAlignContent::SpaceBetween,
        AlignContent::SpaceAround => FlexAlignContent::SpaceAround,
    }
}
