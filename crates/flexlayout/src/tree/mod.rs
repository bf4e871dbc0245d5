//! The box tree: an arena of styled boxes with dirty tracking.
//!
//! Boxes live in an [`indextree::Arena`]; a [`BoxId`] is the only handle
//! callers hold. Every mutation of a box's style or child list marks the
//! box dirty and propagates upward through ancestors whose size depends on
//! their content.

mod measure;
mod pass;

use flexbox::{AxisMargins, Direction};
use indextree::{Arena, Node, NodeId};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::geometry::{Edges, Rect, Size};
use crate::style::{BoxStyle, Dimension};

/// Handle to a box in a [`LayoutTree`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoxId(NodeId);

/// A styled box and the results of the last pass over it.
#[derive(Clone, Debug, Default)]
pub struct BoxNode {
    id: Option<String>,
    style: BoxStyle,
    rect: Option<Rect>,
    dirty: bool,
    /// Size the box takes when nothing constrains it; refreshed bottom-up by each pass.
    natural: Size,
}

impl BoxNode {
    fn new(id: Option<String>, style: BoxStyle) -> Self {
        Self {
            id,
            style,
            rect: None,
            dirty: true,
            natural: Size::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub const fn style(&self) -> &BoxStyle {
        &self.style
    }

    /// Last committed rectangle, if a pass has reached this box.
    #[inline]
    pub const fn rect(&self) -> Option<Rect> {
        self.rect
    }

    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Arena of boxes plus the configuration passes run with.
#[derive(Debug)]
pub struct LayoutTree {
    arena: Arena<BoxNode>,
    config: LayoutConfig,
    pass_count: u64,
}

impl Default for LayoutTree {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    /// Empty tree with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    #[inline]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            arena: Arena::new(),
            config,
            pass_count: 0,
        }
    }

    #[inline]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of boxes whose children have been placed since the tree was created.
    ///
    /// Stays unchanged across a [`Self::layout`] call that found nothing dirty.
    #[inline]
    pub const fn pass_count(&self) -> u64 {
        self.pass_count
    }

    /// Create a detached box. New boxes start dirty.
    pub fn create_box(&mut self, style: BoxStyle) -> BoxId {
        BoxId(self.arena.new_node(BoxNode::new(None, style)))
    }

    /// Create a detached box that [`Self::find_by_id`] can locate.
    pub fn create_box_with_id(&mut self, id: impl Into<String>, style: BoxStyle) -> BoxId {
        BoxId(self.arena.new_node(BoxNode::new(Some(id.into()), style)))
    }

    /// Create a detached box with [`LayoutConfig::default_style`].
    pub fn create_box_default(&mut self) -> BoxId {
        let style = self.config.default_style();
        self.create_box(style)
    }

    /// Borrow a box, or `None` for unknown and removed handles.
    #[inline]
    pub fn get(&self, node: BoxId) -> Option<&BoxNode> {
        self.arena
            .get(node.0)
            .filter(|entry| !entry.is_removed())
            .map(Node::get)
    }

    fn entry(&self, node: BoxId) -> Result<&Node<BoxNode>, LayoutError> {
        self.arena
            .get(node.0)
            .filter(|entry| !entry.is_removed())
            .ok_or(LayoutError::UnknownBox(node))
    }

    fn data_mut(&mut self, node: BoxId) -> Result<&mut BoxNode, LayoutError> {
        self.arena
            .get_mut(node.0)
            .filter(|entry| !entry.is_removed())
            .map(Node::get_mut)
            .ok_or(LayoutError::UnknownBox(node))
    }

    /// Style of a live arena node.
    fn style_of(&self, node: NodeId) -> Option<BoxStyle> {
        self.arena.get(node).map(|entry| entry.get().style)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn parent(&self, node: BoxId) -> Result<Option<BoxId>, LayoutError> {
        Ok(self.entry(node)?.parent().map(BoxId))
    }

    /// Children in layout order.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn children(&self, node: BoxId) -> Result<SmallVec<BoxId, 8>, LayoutError> {
        self.entry(node)?;
        Ok(node.0.children(&self.arena).map(BoxId).collect())
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    /// - [`LayoutError::UnknownBox`] if either handle is stale.
    /// - [`LayoutError::AlreadyAttached`] if `child` already has a parent.
    /// - [`LayoutError::CyclicAttach`] if `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: BoxId, child: BoxId) -> Result<(), LayoutError> {
        self.entry(parent)?;
        if self.entry(child)?.parent().is_some() {
            return Err(LayoutError::AlreadyAttached { child });
        }
        if parent.0.ancestors(&self.arena).any(|ancestor| ancestor == child.0) {
            return Err(LayoutError::CyclicAttach { parent, child });
        }
        parent
            .0
            .checked_append(child.0, &mut self.arena)
            .map_err(|_| LayoutError::CyclicAttach { parent, child })?;
        debug!(target: "flexlayout::tree", "[TREE] append {child:?} under {parent:?}");
        self.mark_dirty(child)
    }

    /// Detach `child` from `parent`. Returns false if it was not a child of `parent`.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn remove_child(&mut self, parent: BoxId, child: BoxId) -> Result<bool, LayoutError> {
        self.entry(parent)?;
        if self.entry(child)?.parent() != Some(parent.0) {
            return Ok(false);
        }
        child.0.detach(&mut self.arena);
        debug!(target: "flexlayout::tree", "[TREE] detach {child:?} from {parent:?}");
        self.mark_dirty(parent)?;
        Ok(true)
    }

    /// Detach every child of `parent`.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn remove_all_children(&mut self, parent: BoxId) -> Result<(), LayoutError> {
        let children = self.children(parent)?;
        for child in &children {
            child.0.detach(&mut self.arena);
        }
        debug!(
            target: "flexlayout::tree",
            "[TREE] detach all {} children of {parent:?}",
            children.len()
        );
        self.mark_dirty(parent)
    }

    /// Detach and return the last child of `parent`.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn pop_child(&mut self, parent: BoxId) -> Result<Option<BoxId>, LayoutError> {
        let Some(last) = self.entry(parent)?.last_child() else {
            return Ok(None);
        };
        last.detach(&mut self.arena);
        self.mark_dirty(parent)?;
        Ok(Some(BoxId(last)))
    }

    /// Remove `node` and its whole subtree from the arena. Their handles become stale.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn remove_box(&mut self, node: BoxId) -> Result<(), LayoutError> {
        let parent = self.entry(node)?.parent();
        node.0.remove_subtree(&mut self.arena);
        debug!(target: "flexlayout::tree", "[TREE] removed subtree {node:?}");
        match parent {
            Some(parent) => self.mark_dirty(BoxId(parent)),
            None => Ok(()),
        }
    }

    /// First box in `root`'s subtree (depth-first, `root` included) carrying `id`.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn find_by_id(&self, root: BoxId, id: &str) -> Result<Option<BoxId>, LayoutError> {
        self.entry(root)?;
        Ok(root
            .0
            .descendants(&self.arena)
            .find(|&candidate| {
                self.arena
                    .get(candidate)
                    .and_then(|entry| entry.get().id())
                    == Some(id)
            })
            .map(BoxId))
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn style(&self, node: BoxId) -> Result<&BoxStyle, LayoutError> {
        Ok(&self.entry(node)?.get().style)
    }

    /// Replace the style of `node` and mark it dirty.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn set_style(&mut self, node: BoxId, style: BoxStyle) -> Result<(), LayoutError> {
        self.data_mut(node)?.style = style;
        self.mark_dirty(node)
    }

    /// Edit the style of `node` in place and mark it dirty.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn update_style<F>(&mut self, node: BoxId, update: F) -> Result<(), LayoutError>
    where
        F: FnOnce(&mut BoxStyle),
    {
        update(&mut self.data_mut(node)?.style);
        self.mark_dirty(node)
    }

    /// Give a layout root a new px size. Only marks it dirty when the size changes.
    ///
    /// # Errors
    /// - [`LayoutError::UnknownBox`] for stale handles.
    /// - [`LayoutError::NotRoot`] if `node` has a parent.
    /// - [`LayoutError::InvalidLength`] for negative or non-finite sizes.
    pub fn resize_root(&mut self, node: BoxId, width: f32, height: f32) -> Result<(), LayoutError> {
        if self.entry(node)?.parent().is_some() {
            return Err(LayoutError::NotRoot(node));
        }
        for (field, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidLength { field, value });
            }
        }
        let data = self.data_mut(node)?;
        let size = (Dimension::Px(width), Dimension::Px(height));
        if (data.style.width, data.style.height) == size {
            return Ok(());
        }
        data.style.width = size.0;
        data.style.height = size.1;
        debug!(target: "flexlayout::tree", "[TREE] resize root {node:?} to {width}x{height}");
        self.mark_dirty(node)
    }

    /// Mark `node` dirty.
    ///
    /// The parent is always marked, since its child inputs changed. Marking
    /// keeps climbing while the ancestor just marked has a width or height
    /// other than px. Percentages are measured from content like `Auto`, so
    /// either one makes its size depend on this subtree.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn mark_dirty(&mut self, node: BoxId) -> Result<(), LayoutError> {
        self.data_mut(node)?.dirty = true;
        let mut next = self.entry(node)?.parent();
        let mut marked = 1usize;
        while let Some(ancestor) = next {
            let Some(entry) = self.arena.get_mut(ancestor) else {
                break;
            };
            let data = entry.get_mut();
            data.dirty = true;
            marked += 1;
            let content_sized = !data.style.width.is_px() || !data.style.height.is_px();
            next = if content_sized { entry.parent() } else { None };
        }
        trace!(target: "flexlayout::tree", "[DIRTY] {node:?} marked {marked} boxes");
        Ok(())
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn is_dirty(&self, node: BoxId) -> Result<bool, LayoutError> {
        Ok(self.entry(node)?.get().dirty)
    }

    /// Last committed rectangle of `node`.
    ///
    /// `None` before the first pass that reached it, and for unknown handles.
    #[inline]
    pub fn rect(&self, node: BoxId) -> Option<Rect> {
        self.get(node).and_then(BoxNode::rect)
    }
}

/// Split a physical (horizontal, vertical) pair into (main, cross).
fn along<T>(direction: Direction, horizontal: T, vertical: T) -> (T, T) {
    match direction {
        Direction::Row => (horizontal, vertical),
        Direction::Column => (vertical, horizontal),
    }
}

/// Margins as (main, cross) axis pairs.
fn axis_margins(direction: Direction, margin: Edges) -> (AxisMargins, AxisMargins) {
    along(
        direction,
        AxisMargins::new(margin.left, margin.right),
        AxisMargins::new(margin.top, margin.bottom),
    )
}
