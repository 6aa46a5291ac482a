use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::core::config::LandingConfig;
use ui::views::Landing;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[lupa] logger already initialized: {err}");
    }
    info!("starting lupa landing (web)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "Lupa" }

        Landing { config: LandingConfig::default() }
    }
}
