//! UI components for the Pubfinder application.
//!
//! # Component Architecture
//!
//! - `app_shell`: AppBar (logo + tab navigation), ErrorBanner
//! - `search_bar`: SearchBar shared by both pages
//! - `publication`: PublicationPage, ItemList, Pagination
//! - `prediction`: PredictionPage, PredictionCard
//!
//! # Context Providers
//!
//! The root [`App`] owns the one [`AppState`] signal and provides it to the
//! tree. Pages read it through [`use_app_state`]:
//!
//! ```ignore
//! let state = use_app_state();
//! let page = state.read().current_page;
//! ```
//!
//! Backend calls are started only by the root. Pages receive them as event
//! handlers, which keeps the network out of everything below `App`.

mod app_shell;
mod prediction;
mod publication;
mod search_bar;

pub use app_shell::{AppBar, ErrorBanner};
pub use prediction::{PredictionCard, PredictionPage};
pub use publication::{ItemList, Pagination, PublicationPage};
pub use search_bar::SearchBar;

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use pubfinder_core::controller::{reject_unavailable, run_prediction, run_search, StateCell};
use pubfinder_core::{ApiClient, AppState, ClientConfig, Operation, Tab};

/// Application state context provider
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Adapts the state signal to the core controllers.
///
/// Every `mutate` takes and releases its own write guard, so nothing stays
/// borrowed while a request is in flight.
#[derive(Clone, Copy)]
struct AppStateSignal(Signal<AppState>);

impl StateCell for AppStateSignal {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut AppState),
    {
        f(&mut *self.0.write());
    }
}

/// Resolve endpoint configuration and build the HTTP client.
fn build_client() -> Result<ApiClient, String> {
    let config = ClientConfig::from_env().map_err(|e| e.to_string())?;
    info!(
        "Search endpoint: {}, prediction endpoint: {}",
        config.search_url, config.predict_url
    );
    ApiClient::new(config).map_err(|e| e.to_string())
}

#[component]
pub fn App() -> Element {
    let client = use_hook(build_client);

    let startup_error = client.as_ref().err().cloned();
    let initial_error = startup_error.clone();
    let mut state = use_signal(move || {
        let mut initial = AppState::new();
        if let Some(message) = initial_error {
            error!("Client configuration failed: {}", message);
            initial.error_message = Some(message);
        }
        initial
    });
    use_context_provider(|| state);

    let search_client = client.clone().ok();
    let search_error = startup_error.clone().unwrap_or_default();
    let handle_search = move |query: String| {
        let Some(client) = search_client.clone() else {
            reject_unavailable(&mut AppStateSignal(state), Operation::Search, &search_error);
            return;
        };
        info!("Searching publications for {:?}", query);
        spawn(async move {
            let mut cell = AppStateSignal(state);
            run_search(&client, &mut cell, &query).await;
        });
    };

    let predict_client = client.ok();
    let predict_error = startup_error.unwrap_or_default();
    let handle_predict = move |text: String| {
        let Some(client) = predict_client.clone() else {
            reject_unavailable(&mut AppStateSignal(state), Operation::Prediction, &predict_error);
            return;
        };
        info!("Requesting category prediction ({} chars)", text.len());
        spawn(async move {
            let mut cell = AppStateSignal(state);
            run_prediction(&client, &mut cell, &text).await;
        });
    };

    let active_tab = state.read().active_tab;

    rsx! {
        div { class: "App",
            header { class: "App-header",
                AppBar {
                    active_tab,
                    on_tab_change: move |tab: Tab| state.write().switch_tab(tab),
                }

                main { class: "main-content",
                    ErrorBanner {}

                    if active_tab == Tab::Publication {
                        PublicationPage { on_search: handle_search }
                    } else {
                        PredictionPage { on_predict: handle_predict }
                    }
                }
            }
        }
    }
}
