//! HTTP client for the search and prediction backends.
//!
//! [`PublicationBackend`] is the seam between the state model and the
//! network: the UI drives an [`ApiClient`], tests drive an in-memory fake.
//!
//! reqwest works on both native and WASM targets:
//! - Native: hyper with rustls, with a per-request timeout
//! - WASM: the browser `fetch()` API, which enforces its own lifetime

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Operation};
use crate::prediction::{PredictRequest, PredictResponse};
use crate::search::{SearchRequest, SearchResponse, SearchResultItem};

/// The two backend calls the application makes.
#[async_trait::async_trait(?Send)]
pub trait PublicationBackend {
    /// Run a full-text query and return normalized hits in backend order.
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, ApiError>;

    /// Classify `text` and return the category to display.
    async fn predict(&self, text: &str) -> Result<String, ApiError>;
}

/// reqwest-backed [`PublicationBackend`].
///
/// Cheap to clone: `reqwest::Client` pools connections behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = build_http_client(&config)
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    async fn post_json<B, R>(&self, operation: Operation, url: &Url, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST {} ({})", url, operation);

        let response = self.http.post(url.clone()).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(operation, status));
        }

        let text = response.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}

#[async_trait::async_trait(?Send)]
impl PublicationBackend for ApiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, ApiError> {
        let request = SearchRequest::multi_match(query);
        let response: SearchResponse = self
            .post_json(Operation::Search, &self.config.search_url, &request)
            .await
            .inspect_err(|e| error!("Error fetching search results: {}", e))?;

        let items = response.into_items();
        info!("Search for {:?} returned {} hits", query, items.len());
        Ok(items)
    }

    async fn predict(&self, text: &str) -> Result<String, ApiError> {
        let request = PredictRequest::new(text);
        let response: PredictResponse = self
            .post_json(Operation::Prediction, &self.config.predict_url, &request)
            .await
            .inspect_err(|e| error!("Error fetching category: {}", e))?;

        let category = response.into_category();
        info!("Predicted category: {:?}", category);
        Ok(category)
    }
}

fn status_error(operation: Operation, status: StatusCode) -> ApiError {
    ApiError::HttpStatus {
        operation,
        status: status.as_u16(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ClientConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("pubfinder/", env!("CARGO_PKG_VERSION")))
        .timeout(config.request_timeout)
        .build()
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ClientConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(ApiClient::new(ClientConfig::default()).is_ok());
    }

    #[test]
    fn test_status_error_carries_operation_and_code() {
        let err = status_error(Operation::Search, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("search results"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) is essentially never listening on loopback.
        let config = ClientConfig::new("http://127.0.0.1:9/_search", "http://127.0.0.1:9/p")
            .unwrap()
            .with_timeout(std::time::Duration::from_secs(2));
        let client = ApiClient::new(config).unwrap();

        let err = client.search("anything").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    }
}
