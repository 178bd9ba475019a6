//! Category prediction wire types.

use serde::{Deserialize, Serialize};

use crate::config::{NO_CATEGORY_DETECTED, NO_PREDICTION};

/// Request body: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

impl PredictRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Response body: `{"prediction": ["label", ...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub prediction: Option<Vec<String>>,
}

impl PredictResponse {
    /// Category to store after a successful call.
    ///
    /// First label when the list has one, empty string for an empty list,
    /// and [`NO_PREDICTION`] when the field is missing altogether.
    pub fn into_category(self) -> String {
        match self.prediction {
            Some(labels) => labels.into_iter().next().unwrap_or_default(),
            None => NO_PREDICTION.to_string(),
        }
    }
}

/// Text for the category slot of the prediction card.
pub fn category_label(category: &str) -> &str {
    if category.is_empty() {
        NO_CATEGORY_DETECTED
    } else {
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category_of(body: serde_json::Value) -> String {
        serde_json::from_value::<PredictResponse>(body)
            .unwrap()
            .into_category()
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(PredictRequest::new("central bank policy")).unwrap();
        assert_eq!(body, json!({ "text": "central bank policy" }));
    }

    #[test]
    fn test_first_label_wins() {
        assert_eq!(
            category_of(json!({ "prediction": ["Economics", "Finance"] })),
            "Economics"
        );
    }

    #[test]
    fn test_empty_list_renders_no_category_detected() {
        let category = category_of(json!({ "prediction": [] }));
        assert_eq!(category, "");
        assert_eq!(category_label(&category), "No category detected");
    }

    #[test]
    fn test_missing_field_is_no_prediction() {
        assert_eq!(category_of(json!({})), "No Prediction");
        assert_eq!(category_of(json!({ "prediction": null })), "No Prediction");
    }

    #[test]
    fn test_category_label_passes_through_labels() {
        assert_eq!(category_label("Accounting"), "Accounting");
        assert_eq!(category_label("No Prediction"), "No Prediction");
    }
}
