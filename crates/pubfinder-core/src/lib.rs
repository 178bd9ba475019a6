//! # Pubfinder Core
//!
//! Platform-independent half of Pubfinder, a client for an academic
//! publication search index and a text category predictor.
//!
//! Everything the UI decides lives here, so it can be tested without a UI
//! runtime. The Dioxus app crate only renders these models and forwards
//! events.
//!
//! ## Modules
//!
//! - [`config`] - Page size, display fallbacks, endpoint configuration
//! - [`error`] - Error types for backend calls
//! - [`search`] - Multi-match request and hit normalization
//! - [`prediction`] - Prediction request/response
//! - [`client`] - `PublicationBackend` trait and the reqwest implementation
//! - [`pagination`] - Page counts, slices and the pagination control model
//! - [`state`] - `AppState` and the view models derived from it
//! - [`controller`] - Async drivers tying the backend to the state
//! - [`input`] - Search bar submission rules

#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod pagination;
pub mod prediction;
pub mod search;
pub mod state;

pub use client::{ApiClient, PublicationBackend};
pub use config::ClientConfig;
pub use error::{ApiError, Operation};
pub use state::{AppState, PredictionView, ResultsView, Tab};
