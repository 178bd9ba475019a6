use dioxus::prelude::*;
use pubfinder_core::config::NO_RESULTS;
use pubfinder_core::search::SearchResultItem;
use pubfinder_core::ResultsView;

/// One page of search results.
///
/// After a search that matched nothing this renders a single "no result"
/// notice. Before the first search an empty page renders an empty list.
#[component]
pub fn ItemList(items: Vec<SearchResultItem>, has_searched: bool) -> Element {
    let content = match ResultsView::for_page(&items, has_searched) {
        ResultsView::NoResults => rsx! {
            div { class: "no-results", "{NO_RESULTS}" }
        },
        ResultsView::Items(page) => rsx! {
            ul { class: "item-list",
                for (index, item) in page.iter().enumerate() {
                    ResultItem { key: "{index}", item: item.clone() }
                }
            }
        },
        ResultsView::Idle | ResultsView::Loading => rsx! {
            ul { class: "item-list" }
        },
    };

    rsx! {
        div { class: "results-container", {content} }
    }
}

/// Single publication: linked title, URL, abstract, metadata and score.
#[component]
pub fn ResultItem(item: SearchResultItem) -> Element {
    let year = item.year.to_string();
    let authors = item.authors.to_string();
    let score = item.score_label();

    rsx! {
        li { class: "item",
            a {
                class: "result-title",
                href: "{item.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{item.title}"
            }
            p { class: "result-url", "{item.url}" }
            p { class: "result-description", "{item.description}" }
            div { class: "result-meta",
                span {
                    strong { " Journal: " }
                    "{item.journal}"
                }
                span {
                    strong { " Year: " }
                    "{year}"
                }
                span {
                    strong { " Authors: " }
                    "{authors}"
                }
            }
            span { class: "result-score", "Score: {score}" }
        }
    }
}
