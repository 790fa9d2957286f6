//! Navigation bar controller.
//!
//! Binds the mobile menu state machine to the document scroll lock and
//! performs the bar's scroll actions through a [`PageHost`].
//!
//! The lock lives in an `Option<ScrollLock<H>>` next to the state. Opening
//! the menu fills it, closing the menu empties it, and dropping the
//! controller drops it, so the release path is always the guard's `Drop`.

use crate::host::{quietly, PageHost, ScrollLock};
use crate::links::{NavLink, CONTACT_ANCHOR};
use crate::menu::{MenuEvent, MenuState};

pub struct NavController<H: PageHost + Clone> {
    host: H,
    state: MenuState,
    lock: Option<ScrollLock<H>>,
}

impl<H: PageHost + Clone> NavController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: MenuState::Closed,
            lock: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Apply a menu event and keep the scroll lock in step with the state.
    pub fn dispatch(&mut self, event: MenuEvent) -> MenuState {
        let next = self.state.next(event);
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, ?event, "Mobile menu transition");
        }
        self.state = next;

        match next {
            MenuState::Open => {
                if self.lock.is_none() {
                    self.lock = Some(ScrollLock::acquire(self.host.clone()));
                }
            }
            MenuState::Closed => {
                self.lock = None;
            }
        }
        next
    }

    /// Scroll to a link's section. Links in the mobile panel also close it.
    pub fn follow_link(&mut self, link: NavLink, from_panel: bool) {
        quietly(self.host.scroll_to_element(link.anchor()), link.label());
        if from_panel {
            self.dispatch(MenuEvent::Link(link));
        }
    }

    /// "Book a Call": scroll to the contact section and close the menu.
    ///
    /// A page without a contact section only closes the menu.
    pub fn call_to_action(&mut self) {
        quietly(self.host.scroll_to_element(CONTACT_ANCHOR), "call to action");
        self.dispatch(MenuEvent::CallToAction);
    }

    /// Wordmark click
    pub fn scroll_to_top(&self) {
        quietly(self.host.scroll_to_top(), "scroll to top");
    }
}
