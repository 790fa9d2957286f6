use dioxus::prelude::*;

use crate::host::EvalHost;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page host.
#[component]
pub fn App() -> Element {
    use_context_provider(EvalHost::current);

    rsx! {
        style { {GLOBAL_STYLES} }
        Landing {}
    }
}
