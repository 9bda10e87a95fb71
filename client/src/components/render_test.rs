//! Server-render snapshots of the fixed views.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::accordion::{AlertsAccordion, AppointmentsAccordion};
use crate::components::navbar::VitalsNavbar;
use crate::pages::home::HomePage;

const SECTION_MARKER: &str = "class=\"accordion__section\"";
const ROW_MARKER: &str = "class=\"accordion__row\"";

fn render<V: RenderHtml>(build: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

fn positions_in_order(html: &str, needles: &[String]) -> bool {
    let mut cursor = 0;
    for needle in needles {
        match html[cursor..].find(needle.as_str()) {
            Some(offset) => cursor += offset + needle.len(),
            None => return false,
        }
    }
    true
}

/// Markup of each accordion group, in document order.
fn accordion_groups(html: &str) -> Vec<&str> {
    html.split(SECTION_MARKER).skip(1).collect()
}

#[test]
fn navbar_renders_five_items_in_order() {
    let html = render(|| view! { <VitalsNavbar/> });
    assert_eq!(html.matches("<li class=\"navbar__item").count(), 5);
    let labels: Vec<String> = ["Upload", "Bills", "Calendar", "Medical Records", "File Explorer"]
        .iter()
        .map(|label| format!(">{label}<"))
        .collect();
    assert!(positions_in_order(&html, &labels), "labels out of order: {html}");
    assert!(html.contains(">Vitals<"));
}

#[test]
fn navbar_marks_only_bills_current() {
    let html = render(|| view! { <VitalsNavbar/> });
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
    assert_eq!(html.matches("navbar__item--active").count(), 1);
}

#[test]
fn each_accordion_renders_five_groups_of_three_rows() {
    let alerts = render(|| view! { <AlertsAccordion/> });
    let appointments = render(|| view! { <AppointmentsAccordion/> });
    for html in [&alerts, &appointments] {
        let groups = accordion_groups(html);
        assert_eq!(groups.len(), 5);
        for (section, group) in groups.iter().enumerate() {
            assert_eq!(group.matches(ROW_MARKER).count(), 3, "group {section}: {group}");
            let labels = vec![
                format!("sticky {section}<"),
                "Item 0<".to_owned(),
                "Item 1<".to_owned(),
                "Item 2<".to_owned(),
            ];
            assert!(positions_in_order(group, &labels), "group {section} labels: {group}");
        }
        assert!(html.contains("aria-expanded=\"true\""));
    }
    assert!(alerts.contains(">Alerts<"));
    assert!(appointments.contains(">Upcoming Appointments<"));
}

#[test]
fn home_page_renders_seven_captioned_boxes_in_order() {
    let html = render(|| view! { <HomePage/> });
    assert_eq!(html.matches("class=\"layout-box__caption\"").count(), 7);
    let captions: Vec<String> = (1..=7)
        .map(|caption| format!("class=\"layout-box__caption\">{caption}<"))
        .collect();
    assert!(positions_in_order(&html, &captions), "captions out of order: {html}");
}

#[test]
fn nested_box_five_has_no_basis() {
    let html = render(|| view! { <HomePage/> });
    assert!(html.contains("<div class=\"layout-box\"><div class=\"layout-box__caption\">5<"), "{html}");
}
