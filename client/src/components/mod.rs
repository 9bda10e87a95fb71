//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome (navbar, accordions) and the captioned
//! cells the page layout is assembled from. None of them take data from
//! context; every view renders fixed markup.

pub mod accordion;
pub mod layout_box;
pub mod navbar;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
