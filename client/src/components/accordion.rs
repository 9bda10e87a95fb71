//! Expandable list panels for the home page sidebar.
//!
//! DESIGN
//! ======
//! `AlertsAccordion` and `AppointmentsAccordion` share one body,
//! `ListAccordion`, and differ only in title and element ids. The list
//! contents are placeholder groups generated from fixed ranges until real
//! alert and appointment feeds exist.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod tests;

use leptos::prelude::*;

/// Number of labeled groups in each accordion list.
pub const SECTION_COUNT: usize = 5;
/// Number of rows under each group heading.
pub const ROWS_PER_SECTION: usize = 3;

/// Accordion listing pending alerts.
#[component]
pub fn AlertsAccordion() -> impl IntoView {
    view! { <ListAccordion title="Alerts" panel_id="alerts"/> }
}

/// Accordion listing upcoming appointments.
#[component]
pub fn AppointmentsAccordion() -> impl IntoView {
    view! { <ListAccordion title="Upcoming Appointments" panel_id="appointments"/> }
}

/// Collapsible panel holding a scrollable list of sticky-headed groups.
///
/// Starts expanded. `panel_id` must be unique on the page; it prefixes the
/// header and content element ids used for `aria-controls`.
#[component]
pub fn ListAccordion(title: &'static str, panel_id: &'static str) -> impl IntoView {
    let expanded = RwSignal::new(true);

    let on_toggle = move |_| {
        expanded.update(|open| *open = !*open);
        #[cfg(feature = "hydrate")]
        log::debug!("accordion {panel_id} expanded={}", expanded.get_untracked());
    };

    let sections = accordion_sections()
        .map(|section| {
            let rows = section_rows()
                .map(|item| {
                    view! {
                        <li class="accordion__row" data-key=row_key(section, item)>
                            <span class="accordion__row-text">{row_label(item)}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <li class="accordion__section" data-key=section_key(section)>
                    <ul class="accordion__section-list">
                        <li class="accordion__subheader">{section_heading(section)}</li>
                        {rows}
                    </ul>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="accordion" class:accordion--expanded=move || expanded.get()>
            <button
                class="accordion__summary"
                id=header_id(panel_id)
                aria-controls=content_id(panel_id)
                aria-expanded=move || expanded.get().to_string()
                on:click=on_toggle
            >
                <span class="accordion__title">{title}</span>
                <span class="accordion__icon" aria-hidden="true">"\u{25BE}"</span>
            </button>
            <div
                class="accordion__details"
                id=content_id(panel_id)
                role="region"
                aria-labelledby=header_id(panel_id)
                hidden=move || !expanded.get()
            >
                <ul class="accordion__list">{sections}</ul>
            </div>
        </div>
    }
}

/// Group indices rendered in each accordion.
pub fn accordion_sections() -> impl Iterator<Item = usize> {
    0..SECTION_COUNT
}

/// Row indices rendered under each group.
pub fn section_rows() -> impl Iterator<Item = usize> {
    0..ROWS_PER_SECTION
}

fn section_key(section: usize) -> String {
    format!("section-{section}")
}

fn row_key(section: usize, item: usize) -> String {
    format!("item-{section}-{item}")
}

fn section_heading(section: usize) -> String {
    format!("I'm sticky {section}")
}

fn row_label(item: usize) -> String {
    format!("Item {item}")
}

fn header_id(panel_id: &str) -> String {
    format!("{panel_id}-header")
}

fn content_id(panel_id: &str) -> String {
    format!("{panel_id}-content")
}
