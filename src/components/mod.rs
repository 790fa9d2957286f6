//! UI Components for the Mojju landing page.

mod hero;
mod mobile_panel;
mod navbar;

pub use hero::Hero;
pub use mobile_panel::MobilePanel;
pub use navbar::Navbar;
