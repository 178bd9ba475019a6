use dioxus::prelude::*;
use pubfinder_core::pagination::PaginationModel;

/// Previous / numbered / next page controls.
///
/// Emits the requested page number and leaves range checks to the owner of
/// the page state.
#[component]
pub fn Pagination(
    current_page: usize,
    total_pages: usize,
    on_page_change: EventHandler<usize>,
) -> Element {
    let model = PaginationModel::new(current_page, total_pages);
    let previous = model.previous_page();
    let next = model.next_page();

    let pages: Vec<(usize, &'static str, String)> = model
        .buttons
        .iter()
        .map(|page| {
            let class = if page.active {
                "page-number active"
            } else {
                "page-number"
            };
            (page.number, class, page.aria_label())
        })
        .collect();

    rsx! {
        div { class: "pagination",
            button {
                class: "pagination-button",
                disabled: model.previous_disabled,
                "aria-label": "Previous Page",
                onclick: move |_| on_page_change.call(previous),
                "« Previous"
            }

            div { class: "page-numbers",
                for (number, class, label) in pages {
                    button {
                        key: "{number}",
                        class,
                        "aria-label": label,
                        onclick: move |_| on_page_change.call(number),
                        "{number}"
                    }
                }
            }

            button {
                class: "pagination-button",
                disabled: model.next_disabled,
                "aria-label": "Next Page",
                onclick: move |_| on_page_change.call(next),
                "Next »"
            }
        }
    }
}
