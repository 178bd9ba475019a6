use dioxus::prelude::*;

use crate::components::use_app_state;

/// Last backend error, shown above whichever page is active.
///
/// Stays visible until the next request clears it.
#[component]
pub fn ErrorBanner() -> Element {
    let state = use_app_state();
    let message = state.read().error_message.clone();

    rsx! {
        if let Some(message) = message {
            div { class: "error-message", "role": "alert", "{message}" }
        }
    }
}
