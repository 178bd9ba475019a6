use dioxus::prelude::*;
use pubfinder_core::PredictionView;

use super::PredictionCard;
use crate::components::{use_app_state, SearchBar};

/// Category prediction page: free-text input and the last prediction.
#[component]
pub fn PredictionPage(on_predict: EventHandler<String>) -> Element {
    let state = use_app_state();
    let mut prediction_made = use_signal(|| false);

    let handle_predict = move |text: String| {
        on_predict.call(text);
        prediction_made.set(true);
    };

    let content = match state.read().prediction_view(prediction_made()) {
        PredictionView::Processing => rsx! {
            div { class: "loading-spinner", "Processing..." }
        },
        PredictionView::Card { category } => rsx! {
            PredictionCard { category: category.to_string() }
        },
        PredictionView::Hidden => rsx! {},
    };

    rsx! {
        div { class: "page-container prediction-page",
            h1 { class: "page-title", "Category Prediction" }
            p { class: "page-description", "Enter text to predict its category." }

            SearchBar {
                on_search: handle_predict,
                placeholder: "Enter text to predict category...",
            }

            {content}
        }
    }
}
