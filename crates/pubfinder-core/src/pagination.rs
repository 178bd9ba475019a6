//! Page arithmetic for the publication results list.
//!
//! Pages are 1-based throughout, matching what the user sees on the page
//! buttons. Nothing here clamps the current page: [`PaginationModel`]
//! describes exactly what the controls render for the inputs it is given,
//! and keeping the page in range is the caller's job (see
//! [`crate::state::AppState::set_page`]).

use crate::config::RESULTS_PER_PAGE;

/// Number of pages needed for `result_count` results: `ceil(n / per_page)`.
pub fn total_pages(result_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    result_count.div_ceil(per_page)
}

/// Slice of `results` shown on `page` (1-based).
///
/// Out-of-range pages yield an empty slice instead of panicking.
pub fn page_slice<T>(results: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= results.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(results.len());
    &results[start..end]
}

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

impl PageButton {
    pub fn aria_label(&self) -> String {
        format!("Go to page {}", self.number)
    }
}

/// Everything the pagination controls need to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub buttons: Vec<PageButton>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl PaginationModel {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let buttons = (1..=total_pages)
            .map(|number| PageButton {
                number,
                active: number == current_page,
            })
            .collect();

        Self {
            current_page,
            total_pages,
            buttons,
            previous_disabled: current_page == 1,
            next_disabled: current_page == total_pages,
        }
    }

    /// Model for a result list of `result_count` items at the fixed page size.
    pub fn for_results(current_page: usize, result_count: usize) -> Self {
        Self::new(current_page, total_pages(result_count, RESULTS_PER_PAGE))
    }

    /// Page requested by the "previous" control.
    pub fn previous_page(&self) -> usize {
        self.current_page.saturating_sub(1)
    }

    /// Page requested by the "next" control.
    pub fn next_page(&self) -> usize {
        self.current_page + 1
    }
}
