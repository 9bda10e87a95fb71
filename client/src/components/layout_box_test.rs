use super::*;

#[test]
fn basis_classes_match_grid_fractions() {
    assert_eq!(basis_class(Basis::OneThird), "basis-1/3");
    assert_eq!(basis_class(Basis::TwoThirds), "basis-2/3");
    assert_eq!(basis_class(Basis::Full), "basis-3/3");
    assert_eq!(basis_class(Basis::ThreeSevenths), "basis-3/7");
    assert_eq!(basis_class(Basis::FourSevenths), "basis-4/7");
}

#[test]
fn layout_box_class_appends_basis_when_given() {
    assert_eq!(layout_box_class(Some(Basis::OneThird)), "layout-box basis-1/3");
}

#[test]
fn layout_box_class_without_basis_is_plain() {
    assert_eq!(layout_box_class(None), "layout-box");
}
