use dioxus::prelude::*;
use pubfinder_core::ResultsView;

use super::{ItemList, Pagination};
use crate::components::{use_app_state, SearchBar};

/// Publication search page: search bar, current page of results, pagination.
#[component]
pub fn PublicationPage(on_search: EventHandler<String>) -> Element {
    let mut state = use_app_state();
    // Local to the page: distinguishes "never searched" from "searched, nothing found"
    let mut has_searched = use_signal(|| false);

    let handle_search = move |query: String| {
        has_searched.set(true);
        on_search.call(query);
    };

    let content = {
        let app = state.read();
        match app.results_view(has_searched()) {
            ResultsView::Loading => rsx! {
                div { class: "loading-spinner", "Loading..." }
            },
            _ => {
                let items = app.displayed_results().to_vec();
                let pagination = app.pagination();
                rsx! {
                    ItemList { items, has_searched: has_searched() }
                    if let Some(model) = pagination {
                        Pagination {
                            current_page: model.current_page,
                            total_pages: model.total_pages,
                            on_page_change: move |page: usize| state.write().set_page(page),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page-container",
            h1 { class: "page-title", "Academic Publication Search" }
            p { class: "page-description",
                "Search academic publications by title or keywords of the Accounting, Economics and Finance."
            }

            SearchBar {
                on_search: handle_search,
                placeholder: "Search Academic publications...",
            }

            {content}
        }
    }
}
