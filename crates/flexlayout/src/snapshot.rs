//! Serializable dump of a subtree for debugging and golden tests.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::style::BoxStyle;
use crate::tree::{BoxId, LayoutTree};

/// One box with its style, last rectangle and children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub style: BoxStyle,
    pub rect: Option<Rect>,
    pub dirty: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutSnapshot>,
}

impl LayoutSnapshot {
    /// Total number of boxes in the snapshot.
    pub fn box_count(&self) -> usize {
        1 + self.children.iter().map(Self::box_count).sum::<usize>()
    }
}

impl LayoutTree {
    /// Capture `node` and its subtree.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownBox`] for stale handles.
    pub fn snapshot(&self, node: BoxId) -> Result<LayoutSnapshot, LayoutError> {
        let data = self.get(node).ok_or(LayoutError::UnknownBox(node))?;
        let children = self
            .children(node)?
            .into_iter()
            .map(|child| self.snapshot(child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LayoutSnapshot {
            id: data.id().map(str::to_owned),
            style: *data.style(),
            rect: data.rect(),
            dirty: data.is_dirty(),
            children,
        })
    }

    /// Pretty-printed JSON of [`Self::snapshot`].
    ///
    /// # Errors
    /// - [`LayoutError::UnknownBox`] for stale handles.
    /// - [`LayoutError::Snapshot`] if serialization fails.
    pub fn dump_json(&self, node: BoxId) -> Result<String, LayoutError> {
        Ok(serde_json::to_string_pretty(&self.snapshot(node)?)?)
    }
}
