//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's layout and delegates rendering details to
//! `components`.

pub mod home;
