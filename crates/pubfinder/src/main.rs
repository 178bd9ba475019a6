use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use pubfinder::components::App as PubfinderApp;

const MAIN_CSS: Asset = asset!("/assets/pubfinder.css");

fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

fn main() {
    // Browser console on web, stdout on desktop
    dioxus::logger::init(log_level()).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let window = WindowBuilder::new()
            .with_title("Pubfinder")
            .with_resizable(true)
            .with_inner_size(LogicalSize::new(1100.0, 850.0))
            .with_min_inner_size(LogicalSize::new(640.0, 480.0));

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::default().with_window(window))
            .launch(Root);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    rsx! {
        // Desktop cannot resolve bundled assets, so the stylesheet is inlined there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/pubfinder.css")} }
        }

        PubfinderApp {}
    }
}
