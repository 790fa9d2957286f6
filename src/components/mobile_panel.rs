//! Mobile Menu Panel
//!
//! Slide-in panel from the right with the same links as the desktop bar,
//! plus a dimmed backdrop while open. Hidden from 768px up.

use dioxus::prelude::*;
use mojju_core::{MenuEvent, MenuState, NavLink};
use mojju_ui::{Button, ButtonVariant, Icon, IconButton, IconKind};

#[derive(Props, Clone, PartialEq)]
pub struct MobilePanelProps {
    /// Current menu state
    pub state: MenuState,
    /// Backdrop or close button activated
    pub on_close: EventHandler<MenuEvent>,
    /// Panel link activated
    pub on_link: EventHandler<NavLink>,
    /// Panel call-to-action activated
    pub on_call_to_action: EventHandler<()>,
}

#[component]
pub fn MobilePanel(props: MobilePanelProps) -> Element {
    let on_close = props.on_close;
    let on_link = props.on_link;
    let on_call_to_action = props.on_call_to_action;
    let hidden = !props.state.is_open();

    rsx! {
        if props.state.is_open() {
            div {
                class: "mobile-backdrop",
                onclick: move |_| on_close.call(MenuEvent::Backdrop),
            }
        }

        div {
            class: props.state.panel_class(),
            "aria-hidden": "{hidden}",
            onclick: move |evt: MouseEvent| evt.stop_propagation(),

            div { class: "mobile-panel-inner",
                div { class: "mobile-panel-header",
                    IconButton {
                        aria_label: "Close menu".to_string(),
                        onclick: move |_| on_close.call(MenuEvent::PanelClose),
                        Icon { kind: IconKind::Close, size: 20 }
                    }
                }

                div { class: "mobile-panel-body",
                    div { class: "mobile-links",
                        for link in NavLink::ALL {
                            a {
                                key: "{link.anchor()}",
                                class: "mobile-link",
                                href: link.href(),
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_link.call(link);
                                },
                                "{link.label()}"
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::CallToAction,
                        class: "cta-mobile".to_string(),
                        onclick: move |_| on_call_to_action.call(()),
                        "Book a Call"
                    }
                }
            }
        }
    }
}
