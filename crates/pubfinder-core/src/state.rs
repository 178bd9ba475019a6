//! Application state shared by every view.
//!
//! [`AppState`] is the single source of truth the root component owns. The
//! views never mutate it directly. They read the derived view models below
//! and send user events back through the transition methods.
//!
//! # Lifecycle of a backend call
//!
//! ```text
//! idle ──begin_request──▶ loading ──complete_*(Ok)──▶ idle (results/category replaced)
//!                                 └─complete_*(Err)─▶ idle (error_message set, data kept)
//! ```
//!
//! Both operations share one `is_loading` flag and one error slot. Nothing
//! prevents two calls from overlapping: each completion simply writes its own
//! outcome, so whichever finishes last determines what is shown.

use crate::config::RESULTS_PER_PAGE;
use crate::error::ApiError;
use crate::pagination::{page_slice, total_pages, PaginationModel};
use crate::prediction::category_label;
use crate::search::SearchResultItem;

/// Top-level page currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Publication,
    Prediction,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Publication => "Publications",
            Tab::Prediction => "Predictions",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            Tab::Publication => "Go to Publications Page",
            Tab::Prediction => "Go to Predictions Page",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Normalized hits of the last successful search, in backend order
    pub results: Vec<SearchResultItem>,
    /// 1-based page of `results` being displayed
    pub current_page: usize,
    /// Last predicted category, empty until a prediction succeeds
    pub category: String,
    pub active_tab: Tab,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            current_page: 1,
            category: String::new(),
            active_tab: Tab::default(),
            is_loading: false,
            error_message: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Enter the loading state and clear the previous error.
    pub fn begin_request(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// Apply the outcome of a search.
    ///
    /// Success replaces the results wholesale and returns to page 1. Failure
    /// records the message and leaves the previous results in place.
    pub fn complete_search(&mut self, outcome: Result<Vec<SearchResultItem>, ApiError>) {
        match outcome {
            Ok(items) => {
                self.results = items;
                self.current_page = 1;
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.is_loading = false;
    }

    /// Apply the outcome of a prediction.
    pub fn complete_prediction(&mut self, outcome: Result<String, ApiError>) {
        match outcome {
            Ok(category) => self.category = category,
            Err(e) => self.error_message = Some(e.to_string()),
        }
        self.is_loading = false;
    }

    /// Switch pages. Results and category survive, the page number does not.
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.current_page = 1;
    }

    /// Move to `page`, kept within `[1, max(total_pages, 1)]`.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    pub fn total_pages(&self) -> usize {
        total_pages(self.results.len(), RESULTS_PER_PAGE)
    }

    /// Results on the current page.
    pub fn displayed_results(&self) -> &[SearchResultItem] {
        page_slice(&self.results, self.current_page, RESULTS_PER_PAGE)
    }

    /// Pagination controls, or `None` when there is nothing to page through.
    pub fn pagination(&self) -> Option<PaginationModel> {
        if self.results.is_empty() {
            None
        } else {
            Some(PaginationModel::for_results(self.current_page, self.results.len()))
        }
    }

    /// What the publication page shows below its search bar.
    pub fn results_view(&self, has_searched: bool) -> ResultsView<'_> {
        if self.is_loading {
            return ResultsView::Loading;
        }
        ResultsView::for_page(self.displayed_results(), has_searched)
    }

    /// What the prediction page shows below its input.
    pub fn prediction_view(&self, prediction_made: bool) -> PredictionView<'_> {
        if self.is_loading {
            PredictionView::Processing
        } else if prediction_made {
            PredictionView::Card {
                category: category_label(&self.category),
            }
        } else {
            PredictionView::Hidden
        }
    }
}

/// Content of the results area of the publication page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsView<'a> {
    /// A search is in flight
    Loading,
    /// Nothing searched yet: render nothing
    Idle,
    /// A search completed and this page is empty
    NoResults,
    Items(&'a [SearchResultItem]),
}

impl<'a> ResultsView<'a> {
    /// Decide how an item list renders `slice`.
    pub fn for_page(slice: &'a [SearchResultItem], has_searched: bool) -> Self {
        match (slice.is_empty(), has_searched) {
            (true, true) => ResultsView::NoResults,
            (true, false) => ResultsView::Idle,
            (false, _) => ResultsView::Items(slice),
        }
    }
}

/// Content of the result area of the prediction page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionView<'a> {
    Processing,
    Hidden,
    Card { category: &'a str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Operation;
    use crate::search::{Authors, Year};

    fn item(n: usize) -> SearchResultItem {
        SearchResultItem {
            url: format!("https://example.org/{}", n),
            title: format!("Paper {}", n),
            description: String::new(),
            score: 100.0 - n as f64,
            journal: "J".to_string(),
            year: Year::Number(2020.0),
            authors: Authors::Single("X".to_string()),
        }
    }

    fn items(n: usize) -> Vec<SearchResultItem> {
        (0..n).map(item).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.active_tab, Tab::Publication);
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
        assert!(state.pagination().is_none());
        assert_eq!(state.results_view(false), ResultsView::Idle);
    }

    #[test]
    fn test_begin_request_clears_error() {
        let mut state = AppState {
            error_message: Some("old".to_string()),
            ..AppState::default()
        };
        state.begin_request();
        assert!(state.is_loading);
        assert!(state.error_message.is_none());
        assert_eq!(state.results_view(true), ResultsView::Loading);
        assert_eq!(state.prediction_view(true), PredictionView::Processing);
    }

    #[test]
    fn test_successful_search_resets_page() {
        let mut state = AppState::new();
        state.complete_search(Ok(items(12)));
        state.set_page(3);
        assert_eq!(state.current_page, 3);

        state.begin_request();
        state.complete_search(Ok(items(7)));
        assert_eq!(state.current_page, 1);
        assert_eq!(state.results.len(), 7);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_twelve_hits_third_page_has_two() {
        let mut state = AppState::new();
        state.complete_search(Ok(items(12)));
        assert_eq!(state.total_pages(), 3);

        state.set_page(3);
        let shown = state.displayed_results();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].title, "Paper 10");
        assert_eq!(shown[1].title, "Paper 11");

        let pagination = state.pagination().unwrap();
        assert_eq!(pagination.buttons.len(), 3);
        assert!(pagination.next_disabled);
        assert!(!pagination.previous_disabled);
    }

    #[test]
    fn test_failed_search_keeps_previous_results() {
        let mut state = AppState::new();
        state.complete_search(Ok(items(4)));

        state.begin_request();
        state.complete_search(Err(ApiError::HttpStatus {
            operation: Operation::Search,
            status: 500,
        }));

        assert!(!state.is_loading);
        assert_eq!(state.results, items(4));
        let message = state.error_message.as_deref().unwrap();
        assert!(message.contains("500"), "message: {}", message);
    }

    #[test]
    fn test_network_failure_uses_error_text() {
        let mut state = AppState::new();
        state.begin_request();
        state.complete_search(Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(
            state.error_message.as_deref(),
            Some("Network error: connection refused")
        );
    }

    #[test]
    fn test_empty_result_after_search_vs_before() {
        let mut state = AppState::new();
        assert_eq!(state.results_view(false), ResultsView::Idle);

        state.begin_request();
        state.complete_search(Ok(Vec::new()));
        assert_eq!(state.results_view(true), ResultsView::NoResults);
        assert!(state.pagination().is_none());
    }

    #[test]
    fn test_results_view_lists_current_page() {
        let mut state = AppState::new();
        state.complete_search(Ok(items(6)));
        match state.results_view(true) {
            ResultsView::Items(shown) => assert_eq!(shown.len(), 5),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_switch_tab_resets_page_but_keeps_data() {
        let mut state = AppState::new();
        state.complete_search(Ok(items(11)));
        state.complete_prediction(Ok("Finance".to_string()));
        state.set_page(2);

        state.switch_tab(Tab::Prediction);
        assert_eq!(state.active_tab, Tab::Prediction);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.results.len(), 11);
        assert_eq!(state.category, "Finance");

        state.switch_tab(Tab::Publication);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_set_page_stays_in_range() {
        let mut state = AppState::new();
        state.set_page(4);
        assert_eq!(state.current_page, 1);

        state.complete_search(Ok(items(12)));
        state.set_page(0);
        assert_eq!(state.current_page, 1);
        state.set_page(9);
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_prediction_outcomes() {
        let mut state = AppState::new();
        assert_eq!(state.prediction_view(false), PredictionView::Hidden);

        state.begin_request();
        state.complete_prediction(Ok(String::new()));
        assert_eq!(
            state.prediction_view(true),
            PredictionView::Card {
                category: "No category detected"
            }
        );

        state.begin_request();
        state.complete_prediction(Ok("Accounting".to_string()));
        assert_eq!(
            state.prediction_view(true),
            PredictionView::Card {
                category: "Accounting"
            }
        );

        state.begin_request();
        state.complete_prediction(Err(ApiError::HttpStatus {
            operation: Operation::Prediction,
            status: 503,
        }));
        assert_eq!(state.category, "Accounting");
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to fetch category. Status: 503")
        );
    }

    #[test]
    fn test_overlapping_calls_last_completion_wins() {
        let mut state = AppState::new();
        state.begin_request(); // search
        state.begin_request(); // prediction

        state.complete_prediction(Err(ApiError::Network("timed out".to_string())));
        assert!(!state.is_loading);

        state.complete_search(Ok(items(3)));
        assert_eq!(state.results.len(), 3);
        // A successful completion does not clear an error written by another call.
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Publication.label(), "Publications");
        assert_eq!(Tab::Prediction.aria_label(), "Go to Predictions Page");
    }
}
