//! Shared UI crate for the Lupa landing page. The session core and all views
//! live here; the `web` and `desktop` crates only launch it.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Brand, share button and language switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod hero;
    pub use hero::Hero;

    mod mockup;
    pub use mockup::PhoneMockup;

    mod features;
    pub use features::FeatureGrid;
}

/// Shared theme stylesheet (`ui/assets/theme/main.css`).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
