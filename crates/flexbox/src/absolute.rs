//! Absolutely positioned children: placed from insets against the container's
//! content box, outside of line breaking and flexing.

use crate::axes::PhysicalRect;

/// Physical insets of a positioned child. `None` means unset.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offsets {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

/// Inputs for one positioned child, already resolved to px.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PositionedChild {
    pub offsets: Offsets,
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Size used when neither an explicit size nor both insets are given.
    pub natural_width: f32,
    pub natural_height: f32,
}

/// Resolve offset and size along one physical axis.
fn resolve_axis(
    extent: f32,
    start: Option<f32>,
    end: Option<f32>,
    size: Option<f32>,
    natural: f32,
) -> (f32, f32) {
    let resolved = size
        .or_else(|| match (start, end) {
            (Some(lead), Some(trail)) => Some((extent - lead - trail).max(0.0)),
            _ => None,
        })
        .unwrap_or(natural);
    let offset = start
        .or_else(|| end.map(|trail| extent - trail - resolved))
        .unwrap_or(0.0);
    (offset, resolved)
}

/// Place a positioned child relative to the container's content box origin.
///
/// `left` wins over `right` and `top` over `bottom`; a child with neither
/// sits at the content box origin.
pub fn place_positioned(
    content_width: f32,
    content_height: f32,
    child: &PositionedChild,
) -> PhysicalRect {
    let (x, width) = resolve_axis(
        content_width,
        child.offsets.left,
        child.offsets.right,
        child.width,
        child.natural_width,
    );
    let (y, height) = resolve_axis(
        content_height,
        child.offsets.top,
        child.offsets.bottom,
        child.height,
        child.natural_height,
    );
    PhysicalRect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if right/bottom insets do not anchor a sized child to the far edges.
    fn right_bottom_anchor_to_far_edges() {
        let child = PositionedChild {
            offsets: Offsets {
                right: Some(10.0),
                bottom: Some(20.0),
                ..Offsets::default()
            },
            width: Some(30.0),
            height: Some(40.0),
            ..PositionedChild::default()
        };
        let rect = place_positioned(200.0, 100.0, &child);
        assert!((rect.x - 160.0).abs() < 0.001);
        assert!((rect.y - 40.0).abs() < 0.001);
        assert!((rect.width - 30.0).abs() < 0.001);
        assert!((rect.height - 40.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if opposing insets without a size do not span the gap between them.
    fn opposing_insets_define_size() {
        let child = PositionedChild {
            offsets: Offsets {
                left: Some(10.0),
                top: Some(5.0),
                right: Some(15.0),
                bottom: Some(5.0),
            },
            natural_width: 999.0,
            natural_height: 999.0,
            ..PositionedChild::default()
        };
        let rect = place_positioned(100.0, 50.0, &child);
        assert!((rect.x - 10.0).abs() < 0.001);
        assert!((rect.width - 75.0).abs() < 0.001);
        assert!((rect.height - 40.0).abs() < 0.001);
    }
}
