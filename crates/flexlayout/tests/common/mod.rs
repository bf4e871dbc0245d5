//! Shared helpers for the integration tests.

use flexlayout::{BoxId, BoxStyle, LayoutTree, Rect};

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _logger = env_logger::builder().is_test(true).try_init();
}

/// Rectangle as `(left, top, right, bottom)`.
pub fn corners(rect: Rect) -> (f32, f32, f32, f32) {
    (rect.x, rect.y, rect.right(), rect.bottom())
}

/// Assert that `node` was placed with the given `(left, top, right, bottom)`.
pub fn assert_corners(tree: &LayoutTree, node: BoxId, expected: (f32, f32, f32, f32)) {
    let rect = tree.rect(node);
    assert!(rect.is_some(), "{node:?} has no rectangle");
    let got = corners(rect.unwrap_or_default());
    let pairs = [
        (got.0, expected.0),
        (got.1, expected.1),
        (got.2, expected.2),
        (got.3, expected.3),
    ];
    for (actual, wanted) in pairs {
        assert!(
            (actual - wanted).abs() < 0.001,
            "{node:?}: got {got:?}, expected {expected:?}"
        );
    }
}

/// Create `parent` with `children` of the given styles, returning the child handles.
pub fn with_children(
    tree: &mut LayoutTree,
    parent: BoxId,
    styles: &[BoxStyle],
) -> anyhow::Result<Vec<BoxId>> {
    let mut children = Vec::with_capacity(styles.len());
    for style in styles {
        let child = tree.create_box(*style);
        tree.append_child(parent, child)?;
        children.push(child);
    }
    Ok(children)
}
