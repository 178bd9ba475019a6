//! Async drivers for the two user-initiated operations.
//!
//! Each driver brackets one backend call with the state transitions of
//! [`AppState`]: enter loading, await the backend, apply the outcome. The
//! state is reached through [`StateCell`] so the same code runs against a
//! plain `AppState` in tests and against a reactive signal in the UI.
//!
//! No lock is held across the await. Each transition is applied in its own
//! short `mutate` call, so the UI stays responsive while a call is pending.

use tracing::warn;

use crate::client::PublicationBackend;
use crate::error::Operation;
use crate::state::AppState;

/// Somewhere an [`AppState`] can be updated in place.
pub trait StateCell {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut AppState);
}

impl StateCell for AppState {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut AppState),
    {
        f(self)
    }
}

/// Run a publication search and store its outcome.
pub async fn run_search<B, S>(backend: &B, state: &mut S, query: &str)
where
    B: PublicationBackend + ?Sized,
    S: StateCell,
{
    state.mutate(AppState::begin_request);
    let outcome = backend.search(query).await;
    if let Err(e) = &outcome {
        warn!("Search failed: {}", e);
    }
    state.mutate(move |s| s.complete_search(outcome));
}

/// Run a category prediction and store its outcome.
pub async fn run_prediction<B, S>(backend: &B, state: &mut S, text: &str)
where
    B: PublicationBackend + ?Sized,
    S: StateCell,
{
    state.mutate(AppState::begin_request);
    let outcome = backend.predict(text).await;
    if let Err(e) = &outcome {
        warn!("Prediction failed: {}", e);
    }
    state.mutate(move |s| s.complete_prediction(outcome));
}

/// Record an operation that could not start because no backend exists,
/// e.g. after the client configuration was rejected at startup.
pub fn reject_unavailable<S>(state: &mut S, operation: Operation, reason: &str)
where
    S: StateCell,
{
    warn!("Cannot fetch {}: {}", operation.subject(), reason);
    let message = reason.to_string();
    state.mutate(move |s| {
        s.is_loading = false;
        s.error_message = Some(message);
    });
}
