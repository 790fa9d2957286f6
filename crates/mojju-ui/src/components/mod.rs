//! Reusable UI components
//!
//! Glass-effect round buttons for controls, solid red for the
//! call-to-action. Class names match the global stylesheet.

mod button;
mod icons;

pub use button::*;
pub use icons::*;
