use dioxus::prelude::*;
use pubfinder_core::input::submitted_query;

/// Text input with a submit button.
///
/// Emits the trimmed buffer on submit (button or Enter). Blank input is
/// ignored, and the buffer is kept after submitting so the query can be
/// refined.
#[component]
pub fn SearchBar(on_search: EventHandler<String>, placeholder: String) -> Element {
    let mut query = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let buffer = query.read().clone();
        if let Some(trimmed) = submitted_query(&buffer) {
            on_search.call(trimmed);
        }
    };

    rsx! {
        form { class: "search-bar", onsubmit: handle_submit,
            input {
                class: "search-input",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            button { class: "search-button", r#type: "submit", "Search" }
        }
    }
}
