//! Tests for `align-items` within a single line.

use super::*;

fn aligned(align_items: AlignItems, items: &[FlexItem]) -> Vec<ItemPlacement> {
    let layout = FlexContainer {
        align_items,
        ..container(100.0, 100.0)
    };
    layout_flex_container(&layout, items)
}

#[test]
/// # Panics
/// Panics if a single line does not take the container's full cross size.
fn single_line_uses_container_cross() {
    let items = [item_fixed(1, 50.0, 50.0)];
    let out = aligned(AlignItems::End, &items);
    assert!(placement_of(&out, 1).is_some_and(|placement| (placement.cross_offset - 50.0).abs() < 0.001));
}

#[test]
/// # Panics
/// Panics if `center` does not center the margin box in the line.
fn center_includes_cross_margins() {
    let mut items = [item_fixed(1, 50.0, 50.0)];
    if let Some(first) = items.first_mut() {
        first.cross_margins = AxisMargins::new(20.0, 0.0);
    }
    let out = aligned(AlignItems::Center, &items);
    // Free = 100 - 70 = 30, half is 15, plus the 20px start margin.
    assert!(placement_of(&out, 1).is_some_and(|placement| (placement.cross_offset - 35.0).abs() < 0.001));
}

#[test]
/// # Panics
/// Panics if stretch resizes a definite item or skips an auto one.
fn stretch_only_touches_auto_items() {
    let mut items = [item_fixed(1, 20.0, 30.0), item_fixed(2, 20.0, 0.0)];
    if let Some(second) = items.get_mut(1) {
        second.cross_size = CrossSize::Auto(0.0);
        second.cross_margins = AxisMargins::new(5.0, 15.0);
    }
    let out = aligned(AlignItems::Stretch, &items);
    assert!(placement_of(&out, 1).is_some_and(|placement| (placement.cross_size - 30.0).abs() < 0.001));
    assert!(placement_of(&out, 2).is_some_and(|placement| {
        (placement.cross_size - 80.0).abs() < 0.001 && (placement.cross_offset - 5.0).abs() < 0.001
    }));
}

#[test]
/// # Panics
/// Panics if stretched size goes negative when margins exceed the line.
fn stretch_never_goes_negative() {
    let mut items = [item_fixed(1, 20.0, 0.0)];
    if let Some(first) = items.first_mut() {
        first.cross_size = CrossSize::Auto(0.0);
        first.cross_margins = AxisMargins::new(80.0, 80.0);
    }
    let out = aligned(AlignItems::Stretch, &items);
    assert!(placement_of(&out, 1).is_some_and(|placement| placement.cross_size.abs() < 0.001));
}

#[test]
/// # Panics
/// Panics if column placements are not mapped to y for main and x for cross.
fn column_maps_main_to_y() {
    let placement = ItemPlacement {
        handle: ItemRef(1),
        main_offset: 10.0,
        main_size: 20.0,
        cross_offset: 30.0,
        cross_size: 40.0,
    };
    let rect = Direction::Column.to_physical(placement.logical());
    assert!((rect.x - 30.0).abs() < 0.001);
    assert!((rect.y - 10.0).abs() < 0.001);
    assert!((rect.width - 40.0).abs() < 0.001);
    assert!((rect.height - 20.0).abs() < 0.001);
}
