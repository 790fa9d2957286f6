//! Mobile menu state machine.
//!
//! The hamburger button toggles the menu. Every other menu action (the
//! backdrop, the panel's close button, a panel link, the call-to-action)
//! only ever closes it.

use crate::links::NavLink;

/// Open/closed state of the slide-in panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User actions that affect the mobile menu
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuEvent {
    /// Hamburger button in the bar
    Hamburger,
    /// Dimmed overlay behind the panel
    Backdrop,
    /// Close button at the top of the panel
    PanelClose,
    /// A link inside the panel
    Link(NavLink),
    /// "Book a Call" in the bar or the panel
    CallToAction,
}

impl MenuState {
    /// Next state after `event`
    pub fn next(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Hamburger) => MenuState::Open,
            (MenuState::Open, MenuEvent::Hamburger) => MenuState::Closed,
            (_, MenuEvent::Backdrop)
            | (_, MenuEvent::PanelClose)
            | (_, MenuEvent::Link(_))
            | (_, MenuEvent::CallToAction) => MenuState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Returns the CSS class for the slide-in panel
    pub fn panel_class(&self) -> &'static str {
        match self {
            MenuState::Closed => "mobile-panel",
            MenuState::Open => "mobile-panel open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn hamburger_toggles() {
        let open = MenuState::Closed.next(MenuEvent::Hamburger);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.next(MenuEvent::Hamburger), MenuState::Closed);
    }

    #[test]
    fn closing_actions_close() {
        for event in [
            MenuEvent::Backdrop,
            MenuEvent::PanelClose,
            MenuEvent::Link(NavLink::Work),
            MenuEvent::CallToAction,
        ] {
            assert_eq!(MenuState::Open.next(event), MenuState::Closed, "{event:?}");
            assert_eq!(MenuState::Closed.next(event), MenuState::Closed, "{event:?}");
        }
    }

    #[test]
    fn panel_classes() {
        assert_eq!(MenuState::Closed.panel_class(), "mobile-panel");
        assert_eq!(MenuState::Open.panel_class(), "mobile-panel open");
    }
}
