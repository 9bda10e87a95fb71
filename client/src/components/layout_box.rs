//! Captioned grey cell used to build the page grid.

#[cfg(test)]
#[path = "layout_box_test.rs"]
mod tests;

use leptos::prelude::*;

/// Flex-basis of a cell within its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    OneThird,
    TwoThirds,
    Full,
    ThreeSevenths,
    FourSevenths,
}

/// A grid cell with a literal caption and optional nested content.
///
/// Omit `basis` for cells whose parent is not a flex container.
#[component]
pub fn LayoutBox(
    caption: &'static str,
    #[prop(optional)] basis: Option<Basis>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=layout_box_class(basis)>
            <div class="layout-box__caption">{caption}</div>
            {children.map(|children| children())}
        </div>
    }
}

pub(crate) fn basis_class(basis: Basis) -> &'static str {
    match basis {
        Basis::OneThird => "basis-1/3",
        Basis::TwoThirds => "basis-2/3",
        Basis::Full => "basis-3/3",
        Basis::ThreeSevenths => "basis-3/7",
        Basis::FourSevenths => "basis-4/7",
    }
}

fn layout_box_class(basis: Option<Basis>) -> String {
    match basis {
        Some(basis) => format!("layout-box {}", basis_class(basis)),
        None => "layout-box".to_owned(),
    }
}
