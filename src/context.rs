//! Shared context for the landing page.
//!
//! The page host is provided once by `App` and read by components with
//! [`use_page_host`]. The resolved configuration is process-global.

use dioxus::prelude::*;
use mojju_core::LandingConfig;

use crate::host::EvalHost;

/// Startup configuration (set from command line args).
pub fn landing_config() -> &'static LandingConfig {
    crate::get_landing_config()
}

/// Hook to access the page host from context.
pub fn use_page_host() -> EvalHost {
    use_context::<EvalHost>()
}
