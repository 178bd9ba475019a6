use dioxus::prelude::*;
use pubfinder_core::Tab;

const TABS: [Tab; 2] = [Tab::Publication, Tab::Prediction];

/// Global app bar with logo and page navigation
#[component]
pub fn AppBar(active_tab: Tab, on_tab_change: EventHandler<Tab>) -> Element {
    rsx! {
        div { class: "app-top",
            div { class: "app-logo",
                span { class: "app-logo-word", "Pub" }
                span { class: "app-logo-word app-logo-word--accent", "finder" }
            }
        }

        nav { class: "main-navigation",
            for tab in TABS {
                button {
                    class: if tab == active_tab { "nav-button active" } else { "nav-button" },
                    "aria-label": tab.aria_label(),
                    onclick: move |_| on_tab_change.call(tab),
                    {tab.label()}
                }
            }
        }
    }
}
