//! Button Components
//!
//! - CallToAction: solid red "Book a Call" button
//! - Glass: round translucent control (mute, hamburger, close)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid red, scales on hover and press
    #[default]
    CallToAction,
    /// Round translucent control
    Glass,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::CallToAction => "btn-cta",
            ButtonVariant::Glass => "btn-glass",
        }
    }
}

/// Join a base class with optional extra classes.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::CallToAction,
///         onclick: move |_| nav.write().call_to_action(),
///         "Book a Call"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Icon-only glass button
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon element
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes(ButtonVariant::Glass.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::CallToAction.class(), "btn-cta");
        assert_eq!(ButtonVariant::Glass.class(), "btn-glass");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::CallToAction);
    }

    #[test]
    fn join_classes_skips_blank_extra() {
        assert_eq!(join_classes("btn-cta", None), "btn-cta");
        assert_eq!(join_classes("btn-cta", Some("  ")), "btn-cta");
        assert_eq!(join_classes("btn-cta", Some("desktop-only")), "btn-cta desktop-only");
    }
}
