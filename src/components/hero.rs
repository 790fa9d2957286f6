//! Video Hero Section
//!
//! Full-viewport looping background video with the studio headline. Owns
//! the mute flag and hands the value and a setter to the navigation bar.

use dioxus::prelude::*;
use mojju_core::HeroAudio;

use crate::components::Navbar;
use crate::context::{landing_config, use_page_host};

/// Element id of the background video
pub const HERO_VIDEO_ID: &str = "hero-video";

#[component]
pub fn Hero() -> Element {
    let config = landing_config();
    let audio = HeroAudio::new(use_page_host(), HERO_VIDEO_ID);
    let mut muted = use_signal(|| true);

    // Mirror the flag onto the element on every change
    let effect_audio = audio.clone();
    use_effect(move || effect_audio.on_flag(muted()));

    rsx! {
        div { class: "hero",
            Navbar {
                muted: muted(),
                on_mute_change: move |value: bool| muted.set(value),
            }

            video {
                id: HERO_VIDEO_ID,
                class: "hero-video",
                autoplay: true,
                muted: true,
                r#loop: true,
                "playsinline": true,
                // Autoplay policies require a silent start whatever the flag says
                onmounted: move |_| audio.on_mount(),
                source { src: "{config.video_url}", r#type: "{config.video_mime}" }
                "Your browser does not support the video tag."
            }

            div { class: "hero-title-wrap",
                h1 { class: "hero-title",
                    for line in config.headline.iter() {
                        span { "{line}" }
                    }
                }
            }
        }
    }
}
