use dioxus::prelude::*;
use pubfinder_core::config::{MODEL_ACCURACY, MODEL_F1_SCORE};

/// Predicted category next to the classifier's published metrics.
///
/// The metrics are fixed figures for the deployed model, not values from the
/// prediction response.
#[component]
pub fn PredictionCard(category: String) -> Element {
    rsx! {
        div { class: "prediction-result-container",
            h2 { class: "prediction-header", "Prediction Results" }

            div { class: "prediction-card",
                div { class: "prediction-main",
                    div { class: "prediction-label", "Category:" }
                    div { class: "prediction-value", "{category}" }
                }

                div { class: "prediction-metrics",
                    div { class: "metric",
                        div { class: "metric-label", "Accuracy" }
                        div { class: "metric-value", "{MODEL_ACCURACY}" }
                    }
                    div { class: "metric",
                        div { class: "metric-label", "F1 Score" }
                        div { class: "metric-value", "{MODEL_F1_SCORE}" }
                    }
                }
            }
        }
    }
}
