//! # vitals-client
//!
//! Leptos frontend for the Vitals medical-paperwork organizer.
//!
//! This crate contains the page layout and the reusable chrome around it:
//! the top navigation bar and the alert/appointment accordions. Views render
//! fixed markup; the only local state is the accordion expand toggle.

pub mod app;
pub mod components;
pub mod pages;

/// WASM entry point: hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed; hydration proceeds regardless.
    console_log::init_with_level(log::Level::Debug).ok();
    log::debug!("hydrating vitals app");
    leptos::mount::hydrate_body(app::App);
}
