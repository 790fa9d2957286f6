//! Navigation Bar Component
//!
//! Fixed full-width bar over the hero:
//! - Left: wordmark, scrolls back to the top
//! - Center: in-page links (hidden below 768px)
//! - Right: mute toggle with "Sound On" hint, call-to-action, hamburger
//!
//! The bar turns dark once the window has scrolled past the threshold.
//! Below 768px the links move into [`MobilePanel`].

use dioxus::prelude::*;
use mojju_core::{sound_hint_visible, toggled, MenuEvent, NavController, NavLink, NavStyle};
use mojju_ui::{Button, ButtonVariant, Icon, IconButton, IconKind};

use crate::components::MobilePanel;
use crate::context::{landing_config, use_page_host};
use crate::host::EvalHost;

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// Current mute flag, owned by the hero
    pub muted: bool,
    /// Writes a new mute flag back to the hero
    pub on_mute_change: EventHandler<bool>,
}

#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let config = landing_config();
    let host = use_page_host();

    let mut style = use_signal(NavStyle::default);
    // Dropping the controller with the component releases any scroll lock
    let mut nav: Signal<NavController<EvalHost>> = use_signal({
        let host = host.clone();
        move || NavController::new(host)
    });

    // Window scroll -> bar style
    use_future(move || {
        let host = host.clone();
        async move {
            let mut watch = host.watch_scroll();
            loop {
                match watch.next_offset().await {
                    Ok(offset) => {
                        let next = NavStyle::from_offset(offset);
                        if *style.peek() != next {
                            tracing::debug!(offset, ?next, "Navbar style changed");
                            style.set(next);
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Scroll watch ended");
                        break;
                    }
                }
            }
        }
    });

    let muted = props.muted;
    let on_mute_change = props.on_mute_change;
    let menu = nav.read().state();
    let mute_label = if muted { "Unmute video" } else { "Mute video" };
    let mute_icon = if muted { IconKind::VolumeOff } else { IconKind::VolumeOn };
    let (menu_label, menu_icon) = if menu.is_open() {
        ("Close menu", IconKind::Close)
    } else {
        ("Open menu", IconKind::Menu)
    };

    rsx! {
        nav { class: "navbar",
            div { class: style().class(),
                div { class: "navbar-row",
                    // Wordmark
                    div {
                        class: "wordmark",
                        onclick: move |_| nav.read().scroll_to_top(),
                        span { "{config.brand}" }
                    }

                    // Desktop links
                    div { class: "nav-links",
                        for link in NavLink::ALL {
                            a {
                                key: "{link.anchor()}",
                                class: "nav-link",
                                href: link.href(),
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    nav.write().follow_link(link, false);
                                },
                                "{link.label()}"
                            }
                        }
                    }

                    div { class: "nav-actions",
                        div { class: "mute-control",
                            IconButton {
                                aria_label: mute_label.to_string(),
                                onclick: move |_| on_mute_change.call(toggled(muted)),
                                Icon { kind: mute_icon }
                            }

                            if sound_hint_visible(muted) {
                                div { class: "sound-hint",
                                    span { class: "sound-hint-label", "Sound On" }
                                    span { class: "sound-hint-arrow", "↗" }
                                }
                            }
                        }

                        Button {
                            variant: ButtonVariant::CallToAction,
                            class: "cta-desktop".to_string(),
                            onclick: move |_| nav.write().call_to_action(),
                            "Book a Call"
                        }

                        IconButton {
                            aria_label: menu_label.to_string(),
                            class: "hamburger".to_string(),
                            onclick: move |_| {
                                nav.write().dispatch(MenuEvent::Hamburger);
                            },
                            Icon { kind: menu_icon, size: 20 }
                        }
                    }
                }
            }
        }

        MobilePanel {
            state: menu,
            on_close: move |event: MenuEvent| {
                nav.write().dispatch(event);
            },
            on_link: move |link: NavLink| nav.write().follow_link(link, true),
            on_call_to_action: move |_| nav.write().call_to_action(),
        }
    }
}
