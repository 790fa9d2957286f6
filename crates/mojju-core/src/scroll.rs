//! Navigation bar scroll style.
//!
//! The bar is transparent at the top of the page and gains a translucent
//! dark background with a bottom border once the page has scrolled past
//! [`SCROLL_THRESHOLD_PX`]. There is no hysteresis: the style is a pure
//! function of the current offset.

/// Vertical offset, in CSS pixels, separating the two styles.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Visual style of the navigation bar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NavStyle {
    /// At or above the threshold; fully transparent
    #[default]
    Top,
    /// Past the threshold; dark translucent background and bottom border
    Scrolled,
}

impl NavStyle {
    /// Style for a window scroll offset.
    ///
    /// Exactly 50px is still `Top`. NaN compares false and maps to `Top`.
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y > SCROLL_THRESHOLD_PX {
            NavStyle::Scrolled
        } else {
            NavStyle::Top
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, NavStyle::Scrolled)
    }

    /// Returns the CSS class for the bar's inner container
    pub fn class(&self) -> &'static str {
        match self {
            NavStyle::Top => "navbar-inner",
            NavStyle::Scrolled => "navbar-inner scrolled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_top() {
        assert_eq!(NavStyle::from_offset(50.0), NavStyle::Top);
        assert_eq!(NavStyle::from_offset(50.5), NavStyle::Scrolled);
    }

    #[test]
    fn zero_and_negative_are_top() {
        assert_eq!(NavStyle::from_offset(0.0), NavStyle::Top);
        // Elastic overscroll reports negative offsets on some platforms
        assert_eq!(NavStyle::from_offset(-20.0), NavStyle::Top);
    }

    #[test]
    fn non_finite_offsets() {
        assert_eq!(NavStyle::from_offset(f64::NAN), NavStyle::Top);
        assert_eq!(NavStyle::from_offset(f64::INFINITY), NavStyle::Scrolled);
    }

    #[test]
    fn default_is_top() {
        assert_eq!(NavStyle::default(), NavStyle::Top);
        assert!(!NavStyle::default().is_scrolled());
    }

    #[test]
    fn classes() {
        assert_eq!(NavStyle::Top.class(), "navbar-inner");
        assert_eq!(NavStyle::Scrolled.class(), "navbar-inner scrolled");
    }
}
