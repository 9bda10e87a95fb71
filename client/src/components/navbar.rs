//! Top navigation bar with the Vitals brand mark and section links.
//!
//! DESIGN
//! ======
//! Links come from a fixed table so the rendered order and the active entry
//! are defined in one place. Every link currently targets `#`; sections are
//! not routed yet.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod tests;

use leptos::prelude::*;

/// One entry in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Upload", href: "#", active: false },
    NavLink { label: "Bills", href: "#", active: true },
    NavLink { label: "Calendar", href: "#", active: false },
    NavLink { label: "Medical Records", href: "#", active: false },
    NavLink { label: "File Explorer", href: "#", active: false },
];

const LOGO_PATH: &str = "M17.6482 10.1305L15.8785 7.02583L7.02979 22.5499H10.5278L17.6482 10.1305ZM19.8798 14.0457L18.11 17.1983L19.394 19.4511H16.8453L15.1056 22.5499H24.7272L19.8798 14.0457Z";

/// Navbar entries in display order.
pub fn nav_links() -> &'static [NavLink] {
    &NAV_LINKS
}

/// Brand glyph drawn in the current text color.
#[component]
pub fn VitalsLogo() -> impl IntoView {
    view! {
        <svg class="navbar__logo" fill="none" height="36" viewBox="0 0 32 32" width="36" aria-hidden="true">
            <path
                clip-rule="evenodd"
                d=LOGO_PATH
                fill="currentColor"
                fill-rule="evenodd"
            ></path>
        </svg>
    }
}

/// Application navbar: brand on the left, section links beside it.
#[component]
pub fn VitalsNavbar() -> impl IntoView {
    let items = nav_links()
        .iter()
        .map(|link| {
            view! {
                <li class=nav_item_class(link.active)>
                    <a
                        class=nav_link_class(link.active)
                        href=link.href
                        aria-current=aria_current(link.active)
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar navbar--bordered">
            <div class="navbar__content navbar__content--start">
                <div class="navbar__brand">
                    <VitalsLogo/>
                    <p class="navbar__brand-name">"Vitals"</p>
                </div>
                <ul class="navbar__items">{items}</ul>
            </div>
        </nav>
    }
}

fn nav_item_class(active: bool) -> &'static str {
    if active { "navbar__item navbar__item--active" } else { "navbar__item" }
}

fn nav_link_class(active: bool) -> &'static str {
    if active { "navbar__link navbar__link--secondary" } else { "navbar__link" }
}

fn aria_current(active: bool) -> Option<&'static str> {
    active.then_some("page")
}
