//! Mojju Landing UI Components
//!
//! Presentational Dioxus components shared by the landing page: buttons
//! and the Lucide icon set used in the navigation bar. None of them own
//! state; callers pass values and handlers in.

pub mod components;

pub use components::*;
