//! In-page navigation links.
//!
//! The desktop bar and the mobile panel render the same five links in the
//! same order.

/// Fragment id the call-to-action scrolls to.
pub const CONTACT_ANCHOR: &str = "contact";

/// A primary navigation link
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum NavLink {
    Work,
    Process,
    Capabilities,
    Team,
    Contact,
}

impl NavLink {
    /// All links in display order
    pub const ALL: [NavLink; 5] = [
        NavLink::Work,
        NavLink::Process,
        NavLink::Capabilities,
        NavLink::Team,
        NavLink::Contact,
    ];

    /// Get the display label for this link
    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Work => "Work",
            NavLink::Process => "Process",
            NavLink::Capabilities => "Capabilities",
            NavLink::Team => "Team",
            NavLink::Contact => "Contact",
        }
    }

    /// Get the fragment id (without `#`) this link targets
    pub fn anchor(&self) -> &'static str {
        match self {
            NavLink::Work => "portfolio",
            NavLink::Process => "about",
            NavLink::Capabilities => "services",
            NavLink::Team => "team",
            NavLink::Contact => CONTACT_ANCHOR,
        }
    }

    /// Get the `href` attribute value
    pub fn href(&self) -> &'static str {
        match self {
            NavLink::Work => "#portfolio",
            NavLink::Process => "#about",
            NavLink::Capabilities => "#services",
            NavLink::Team => "#team",
            NavLink::Contact => "#contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_in_display_order() {
        let labels: Vec<_> = NavLink::ALL.iter().map(|l| l.label()).collect();
        assert_eq!(labels, ["Work", "Process", "Capabilities", "Team", "Contact"]);
    }

    #[test]
    fn href_is_anchor_with_hash() {
        for link in NavLink::ALL {
            assert_eq!(link.href(), format!("#{}", link.anchor()));
        }
    }

    #[test]
    fn contact_link_targets_cta_anchor() {
        assert_eq!(NavLink::Contact.anchor(), CONTACT_ANCHOR);
        assert_eq!(NavLink::Work.anchor(), "portfolio");
        assert_eq!(NavLink::Capabilities.anchor(), "services");
    }
}
