// File: crates/border-core/tests/merge.rs
// Purpose: Validate merge eligibility, add composition, and constructor validation.

use border_core::{
    Border, BorderDirectional, BorderSide, BorderStyle, BoxBorder, Color, SideError,
};

fn white(width: f32) -> BorderSide {
    BorderSide::new(Color::WHITE, width)
}

#[test]
fn merged_side_widths_sum() {
    let merged = BorderSide::merge(&white(1.5), &white(2.5));
    assert_eq!(merged.width, 4.0);
    assert_eq!(merged.color, Color::WHITE);
    assert_eq!(merged.style, BorderStyle::Solid);
}

#[test]
fn merging_with_a_none_side_keeps_the_other() {
    let side = BorderSide::new(Color::RED, 2.0);
    assert_eq!(BorderSide::merge(&BorderSide::NONE, &side), side);
    assert_eq!(BorderSide::merge(&side, &BorderSide::NONE), side);
    assert_eq!(BorderSide::merge(&BorderSide::NONE, &BorderSide::NONE), BorderSide::NONE);
}

#[test]
fn different_colors_are_not_mergeable() {
    let red = BorderSide::new(Color::RED, 1.0);
    let blue = BorderSide::new(Color::BLUE, 1.0);
    assert!(!BorderSide::can_merge(&red, &blue));

    // The border-level add must reject, never average colors.
    let a = Border::all(red);
    let b = BoxBorder::Axis(Border::all(blue));
    assert_eq!(a.add(&b), None);
}

#[test]
fn stacking_two_uniform_borders_sums_their_weight() {
    let base = Border::all(white(2.0));
    let accent = BoxBorder::Axis(Border::all(white(1.0)));
    assert_eq!(base.add(&accent), Some(BoxBorder::Axis(Border::all(white(3.0)))));
}

#[test]
fn axis_add_rejects_a_directional_operand() {
    // Combinable only the other way around; callers try the reverse order.
    let a = Border::symmetric(BorderSide::NONE, white(1.0));
    let b = BorderDirectional::new(white(1.0), white(2.0), white(2.0), white(1.0));
    assert_eq!(a.add(&BoxBorder::Directional(b)), None);
    assert!(b.add(&BoxBorder::Axis(a)).is_some());
}

#[test]
fn directional_pair_merges_side_wise() {
    let a = BorderDirectional::new(white(1.0), white(2.0), BorderSide::NONE, white(1.0));
    let b = BorderDirectional::new(white(0.5), BorderSide::NONE, white(3.0), white(0.5));
    let merged = a.add(&BoxBorder::Directional(b));
    assert_eq!(
        merged,
        Some(BoxBorder::Directional(BorderDirectional::new(
            white(1.5),
            white(2.0),
            white(3.0),
            white(1.5),
        ))),
    );

    let clash = BorderDirectional::all(BorderSide::new(Color::RED, 1.0));
    assert_eq!(a.add(&BoxBorder::Directional(clash)), None);
}

#[test]
fn directional_add_keeps_axis_laterals_when_it_has_none() {
    let a = BorderDirectional::new(white(1.0), BorderSide::NONE, BorderSide::NONE, white(1.0));
    let lateral = BorderSide::new(Color::RED, 2.0);
    let b = Border::new(white(1.0), lateral, white(1.0), lateral);
    let merged = a.add(&BoxBorder::Axis(b));
    assert_eq!(
        merged,
        Some(BoxBorder::Axis(Border::new(white(2.0), lateral, white(2.0), lateral))),
    );
}

#[test]
fn directional_add_keeps_its_own_laterals_when_axis_has_none() {
    let start = BorderSide::new(Color::RED, 2.0);
    let a = BorderDirectional::new(white(1.0), start, start, white(1.0));
    let b = Border::symmetric(BorderSide::NONE, white(1.0));
    let merged = a.add(&BoxBorder::Axis(b));
    assert_eq!(
        merged,
        Some(BoxBorder::Directional(BorderDirectional::new(white(2.0), start, start, white(2.0)))),
    );
}

#[test]
fn directional_add_rejects_competing_laterals() {
    // Both operands carry lateral content; without a reading direction there
    // is no correct pairing of start/end with left/right.
    let a = BorderDirectional::new(white(1.0), white(2.0), white(2.0), white(1.0));
    let b = Border::all(white(1.0));
    assert_eq!(a.add(&BoxBorder::Axis(b)), None);
}

#[test]
fn directional_add_rejects_unmergeable_top_or_bottom() {
    let a = BorderDirectional::new(BorderSide::new(Color::RED, 1.0), BorderSide::NONE, BorderSide::NONE, white(1.0));
    let b = Border::symmetric(BorderSide::NONE, white(1.0));
    assert_eq!(a.add(&BoxBorder::Axis(b)), None);
}

#[test]
fn styleless_side_with_width_is_not_freely_mergeable() {
    // Only a side that paints nothing merges with anything; a none-styled
    // side that still carries width does not qualify.
    let ghost = BorderSide::new(Color::RED, 2.0).with_style(BorderStyle::None);
    let blue = BorderSide::new(Color::BLUE, 1.0);
    assert!(!BorderSide::can_merge(&ghost, &blue));
    assert!(BorderSide::can_merge(&ghost, &ghost));
}

#[test]
fn try_new_validates_widths() {
    assert_eq!(
        BorderSide::try_new(Color::WHITE, -1.0, BorderStyle::Solid),
        Err(SideError::NegativeWidth(-1.0)),
    );
    assert!(matches!(
        BorderSide::try_new(Color::WHITE, f32::NAN, BorderStyle::Solid),
        Err(SideError::NonFiniteWidth(_)),
    ));

    let ok = BorderSide::try_new(Color::WHITE, 2.0, BorderStyle::Solid).unwrap();
    assert_eq!(ok, white(2.0));
}
