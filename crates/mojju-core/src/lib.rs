//! Mojju Landing Core Library
//!
//! Host-independent interaction model for the Mojju landing page: the
//! video hero's audio rules, the navigation bar's scroll style, and the
//! mobile menu state machine with its document scroll lock.
//!
//! ## Overview
//!
//! Every decision the page makes is a pure function from the current state
//! and an event to the next state. Side effects on the rendering surface go
//! through the [`PageHost`] trait, so the logic here runs unchanged under
//! the Dioxus webview and under the in-memory [`RecordingHost`] in tests.
//!
//! ## Quick Start
//!
//! ```
//! use mojju_core::{MenuEvent, NavController, NavLink, RecordingHost};
//!
//! let host = RecordingHost::new();
//! let mut nav = NavController::new(host.clone());
//!
//! nav.dispatch(MenuEvent::Hamburger);
//! assert!(host.scroll_locked());
//!
//! nav.follow_link(NavLink::Team, true);
//! assert!(!nav.is_open());
//! assert!(!host.scroll_locked());
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod host;
pub mod links;
pub mod menu;
pub mod nav;
pub mod scroll;

// Re-exports
pub use audio::{sound_hint_visible, toggled, HeroAudio, VideoAudio, UNMUTED_VOLUME};
pub use config::LandingConfig;
pub use error::{LandingError, LandingResult};
pub use host::{quietly, validate_element_id, HostCall, PageHost, RecordingHost, ScrollLock};
pub use links::{NavLink, CONTACT_ANCHOR};
pub use menu::{MenuEvent, MenuState};
pub use nav::NavController;
pub use scroll::{NavStyle, SCROLL_THRESHOLD_PX};
