//! Landing page: video hero followed by the contact section the
//! call-to-action scrolls to.

use dioxus::prelude::*;
use mojju_core::CONTACT_ANCHOR;

use crate::components::Hero;
use crate::context::landing_config;

#[component]
pub fn Landing() -> Element {
    let config = landing_config();

    rsx! {
        main { class: "landing",
            Hero {}

            section { id: CONTACT_ANCHOR, class: "contact-section",
                h2 { class: "contact-title", "Book a Call" }
                p { class: "contact-body",
                    "Tell {config.brand} about your next film."
                }
            }
        }
    }
}
