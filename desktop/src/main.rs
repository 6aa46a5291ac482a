#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::core::config::LandingConfig;
use ui::views::Landing;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[lupa] logger already initialized: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "starting lupa landing (desktop)");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Lupa – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    init_logging();
    eprintln!("lupa-desktop was built without the `desktop` feature; nothing to launch");
}

#[component]
fn App() -> Element {
    // Read lupa.toml from the platform config dir once per session.
    let config = use_hook(LandingConfig::load_default);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Landing { config }
    }
}
