//! Property-based tests for the landing page interaction model
//!
//! Uses proptest to check the mute, scroll-style and mobile-menu rules over
//! arbitrary event sequences.

use mojju_core::{
    sound_hint_visible, toggled, MenuEvent, MenuState, NavController, NavLink, NavStyle,
    RecordingHost, VideoAudio,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn nav_link_strategy() -> impl Strategy<Value = NavLink> {
    prop::sample::select(NavLink::ALL.to_vec())
}

fn menu_event_strategy() -> impl Strategy<Value = MenuEvent> {
    prop_oneof![
        3 => Just(MenuEvent::Hamburger),
        1 => Just(MenuEvent::Backdrop),
        1 => Just(MenuEvent::PanelClose),
        1 => nav_link_strategy().prop_map(MenuEvent::Link),
        1 => Just(MenuEvent::CallToAction),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The "Sound On" hint is shown exactly while the flag is muted
    #[test]
    fn hint_tracks_flag(toggles in 0usize..64) {
        let mut muted = true;
        for _ in 0..toggles {
            muted = toggled(muted);
            prop_assert_eq!(sound_hint_visible(muted), muted);
        }
        prop_assert_eq!(muted, toggles % 2 == 0);
    }

    /// Two toggles restore both the flag and the volume
    #[test]
    fn double_toggle_round_trips(start in any::<bool>()) {
        let back = toggled(toggled(start));
        prop_assert_eq!(back, start);
        prop_assert_eq!(VideoAudio::for_flag(back), VideoAudio::for_flag(start));
    }

    /// Style is Scrolled iff the offset is strictly past 50px
    #[test]
    fn style_is_threshold_function(offset in -1_000.0f64..100_000.0) {
        let style = NavStyle::from_offset(offset);
        prop_assert_eq!(style.is_scrolled(), offset > 50.0);
    }

    /// Style only depends on the latest offset, not on history
    #[test]
    fn style_has_no_hysteresis(offsets in prop::collection::vec(0.0f64..200.0, 1..50)) {
        let mut style = NavStyle::default();
        for offset in &offsets {
            style = NavStyle::from_offset(*offset);
        }
        let last = *offsets.last().unwrap();
        prop_assert_eq!(style, NavStyle::from_offset(last));
    }

    /// Any panel link closes an open menu
    #[test]
    fn panel_links_close_menu(link in nav_link_strategy()) {
        let host = RecordingHost::new();
        let mut nav = NavController::new(host.clone());
        nav.dispatch(MenuEvent::Hamburger);
        prop_assert!(nav.is_open());

        nav.follow_link(link, true);
        prop_assert_eq!(nav.state(), MenuState::Closed);
        prop_assert!(!host.scroll_locked());
    }

    /// The document is locked exactly while the menu is open
    #[test]
    fn lock_matches_state(events in prop::collection::vec(menu_event_strategy(), 0..40)) {
        let host = RecordingHost::new();
        let mut nav = NavController::new(host.clone());
        for event in events {
            nav.dispatch(event);
            prop_assert_eq!(host.scroll_locked(), nav.is_open());
        }
        drop(nav);
        prop_assert!(!host.scroll_locked());
    }
}
