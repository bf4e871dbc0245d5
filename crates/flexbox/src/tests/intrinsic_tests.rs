//! Tests for natural container sizes.

use super::*;

fn measured(base: f32, content: f32, grow: f32, cross: f32) -> MeasureItem {
    MeasureItem {
        flex_base_size: base,
        content_size: content,
        flex_grow: grow,
        flex_shrink: 0.0,
        main_margins: AxisMargins::default(),
        outer_cross: cross,
    }
}

#[test]
/// # Panics
/// Panics if fixed items do not sum along main and max along cross.
fn fixed_items_sum_main_and_max_cross() {
    let items = [measured(30.0, 30.0, 0.0, 10.0), measured(50.0, 50.0, 0.0, 40.0)];
    let natural = natural_container_size(None, false, &items);
    assert!((natural.main - 80.0).abs() < 0.001);
    assert!((natural.cross - 40.0).abs() < 0.001);
}

#[test]
/// # Panics
/// Panics if a grow-only item with zero base does not recover its content size.
fn growing_item_contributes_its_content() {
    let items = [measured(0.0, 120.0, 1.0, 20.0), measured(30.0, 30.0, 0.0, 20.0)];
    assert!((max_content_flex_fraction(&items[0]) - 120.0).abs() < 0.001);
    let natural = natural_container_size(None, false, &items);
    assert!((natural.main - 150.0).abs() < 0.001);
}

#[test]
/// # Panics
/// Panics if the largest fraction on the line is not applied to every grower.
fn largest_fraction_wins() {
    let items = [measured(0.0, 100.0, 2.0, 0.0), measured(0.0, 20.0, 1.0, 0.0)];
    // Fractions are 50 and 20; 50 × (2 + 1) = 150.
    let natural = natural_container_size(None, false, &items);
    assert!((natural.main - 150.0).abs() < 0.001);
}

#[test]
/// # Panics
/// Panics if wrapping with a definite main does not stack line cross sizes.
fn definite_main_wraps_and_stacks_lines() {
    let items = [
        measured(100.0, 100.0, 0.0, 30.0),
        measured(100.0, 100.0, 0.0, 50.0),
        measured(100.0, 100.0, 0.0, 20.0),
    ];
    let natural = natural_container_size(Some(200.0), true, &items);
    assert!((natural.main - 200.0).abs() < 0.001);
    assert!((natural.cross - 70.0).abs() < 0.001);
    let unwrapped = natural_container_size(None, true, &items);
    assert!((unwrapped.main - 300.0).abs() < 0.001);
    assert!((unwrapped.cross - 50.0).abs() < 0.001);
}

#[test]
/// # Panics
/// Panics if a shrinking item with zero base yields a non-zero fraction.
fn zero_base_never_contracts() {
    let mut item = measured(0.0, 0.0, 0.0, 0.0);
    item.flex_shrink = 1.0;
    assert!(max_content_flex_fraction(&item).abs() < 0.001);
    let contracting = MeasureItem {
        flex_base_size: 100.0,
        content_size: 60.0,
        flex_shrink: 2.0,
        ..item
    };
    // -(100 - 60) / (2 × 100)
    assert!((max_content_flex_fraction(&contracting) + 0.2).abs() < 0.001);
    let natural = natural_container_size(None, false, &[contracting]);
    assert!((natural.main - 60.0).abs() < 0.001);
}

#[test]
/// # Panics
/// Panics if an empty container reports a non-zero natural size.
fn empty_container_is_zero() {
    let natural = natural_container_size(Some(100.0), true, &[]);
    assert!(natural.main.abs() < 0.001 && natural.cross.abs() < 0.001);
}
