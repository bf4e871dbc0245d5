//! Tests for wrapping into several lines and distributing lines with `align-content`.

use super::*;

fn wrapping(main_size: f32, cross_size: f32, align_content: AlignContent) -> FlexContainer {
    FlexContainer {
        wrap: true,
        align_content,
        ..container(main_size, cross_size)
    }
}

#[test]
/// # Panics
/// Panics if the third of three 100px items does not wrap onto a second line.
fn third_item_wraps_to_second_line() {
    init_logging();
    let items = vec![
        item_fixed(1, 100.0, 100.0),
        item_fixed(2, 100.0, 100.0),
        item_fixed(3, 100.0, 100.0),
    ];
    let out = layout_flex_container(&wrapping(200.0, 400.0, AlignContent::Start), &items);
    assert_eq!(out.len(), 3);
    let third = placement_of(&out, 3);
    assert!(third.is_some_and(|placement| {
        placement.main_offset.abs() < 0.001 && (placement.cross_offset - 100.0).abs() < 0.001
    }));
    let second = placement_of(&out, 2);
    assert!(second.is_some_and(|placement| {
        (placement.main_offset - 100.0).abs() < 0.001 && placement.cross_offset.abs() < 0.001
    }));
}

#[test]
/// # Panics
/// Panics if lines are not sized by their tallest member.
fn line_cross_size_is_tallest_member() {
    let items = vec![
        item_fixed(1, 100.0, 30.0),
        item_fixed(2, 100.0, 60.0),
        item_fixed(3, 100.0, 20.0),
    ];
    let out = layout_flex_container(&wrapping(200.0, 400.0, AlignContent::Start), &items);
    let third = placement_of(&out, 3);
    assert!(third.is_some_and(|placement| (placement.cross_offset - 60.0).abs() < 0.001));
}

#[test]
/// # Panics
/// Panics if `align-content: center` does not shift every line by half the leftover.
fn align_content_center_shifts_lines() {
    let items = vec![item_fixed(1, 150.0, 50.0), item_fixed(2, 150.0, 50.0)];
    let out = layout_flex_container(&wrapping(200.0, 300.0, AlignContent::Center), &items);
    let first = placement_of(&out, 1);
    let second = placement_of(&out, 2);
    assert!(first.is_some_and(|placement| (placement.cross_offset - 100.0).abs() < 0.001));
    assert!(second.is_some_and(|placement| (placement.cross_offset - 150.0).abs() < 0.001));
}

#[test]
/// # Panics
/// Panics if stretched lines do not let auto-cross items fill the grown band.
fn align_content_stretch_grows_auto_items() {
    let mut items = vec![item_fixed(1, 150.0, 0.0), item_fixed(2, 150.0, 50.0)];
    if let Some(first) = items.first_mut() {
        first.cross_size = CrossSize::Auto(50.0);
    }
    let layout = FlexContainer {
        align_items: AlignItems::Stretch,
        ..wrapping(200.0, 300.0, AlignContent::Stretch)
    };
    let out = layout_flex_container(&layout, &items);
    let first = placement_of(&out, 1);
    let second = placement_of(&out, 2);
    assert!(first.is_some_and(|placement| (placement.cross_size - 150.0).abs() < 0.001));
    assert!(second.is_some_and(|placement| {
        (placement.cross_offset - 150.0).abs() < 0.001 && (placement.cross_size - 50.0).abs() < 0.001
    }));
}

#[test]
/// # Panics
/// Panics if an empty container produces placements.
fn empty_container_produces_nothing() {
    let out = layout_flex_container(&wrapping(200.0, 300.0, AlignContent::SpaceAround), &[]);
    assert!(out.is_empty());
}
