//! Translation catalog for `lupa-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (per-language Fluent loaders)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/lupa-ui.ftl   (fallback/reference)
//!   kk/lupa-ui.ftl
//!   ru/lupa-ui.ftl
//! ```
//!
//! Unlike a single global loader that gets re-pointed on language change,
//! every [`LanguageCode`] is resolved once into an immutable
//! [`TranslationBundle`]. Switching language is then just a different lookup,
//! so the page can never show strings from two locales at once.
//!
//! To add a new locale:
//! 1. Copy `en/lupa-ui.ftl` to `i18n/<code>/lupa-ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Add the code to [`LanguageCode`] and run the tests for completeness.
//!
//! NOTE: The hyphenated filename `lupa-ui.ftl` is canonical across all locales.

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::error;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

use crate::core::locale::LanguageCode;

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en/{DOMAIN}.ftl`
const DOMAIN: &str = "lupa-ui"; // pinned explicitly (avoid relying on env! during macro domain resolution)

const FALLBACK: &str = "en";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Display strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationBundle {
    pub language_label: String,
    pub share_link: String,
    pub share_copied: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub email_placeholder: String,
    pub join_waitlist: String,
    pub submitting_label: String,
    pub waitlist_success: String,
    pub waitlist_failed: String,
    pub features_title: String,
    pub feature_1_title: String,
    pub feature_1_desc: String,
    pub feature_2_title: String,
    pub feature_2_desc: String,
    pub feature_3_title: String,
    pub feature_3_desc: String,
    pub footer_text: String,
    pub mockup_badge: String,
    pub mockup_search: String,
    pub mockup_section_title: String,
}

static CATALOG: Lazy<[TranslationBundle; 3]> =
    Lazy::new(|| LanguageCode::ALL.map(TranslationBundle::load));

impl TranslationBundle {
    /// Cached bundle for `code`.
    pub fn for_language(code: LanguageCode) -> &'static TranslationBundle {
        &CATALOG[code.index()]
    }

    /// Resolve every message for `code`. Loading failures fall back to the
    /// `en` strings and are logged; they indicate a broken asset tree.
    fn load(code: LanguageCode) -> Self {
        let loader = loader_for(code);
        let loader = &loader;
        Self {
            language_label: fl!(loader, "language-label"),
            share_link: fl!(loader, "share-link"),
            share_copied: fl!(loader, "share-copied"),
            hero_title: fl!(loader, "hero-title"),
            hero_subtitle: fl!(loader, "hero-subtitle"),
            email_placeholder: fl!(loader, "email-placeholder"),
            join_waitlist: fl!(loader, "join-waitlist"),
            submitting_label: fl!(loader, "submitting-label"),
            waitlist_success: fl!(loader, "waitlist-success"),
            waitlist_failed: fl!(loader, "waitlist-failed"),
            features_title: fl!(loader, "features-title"),
            feature_1_title: fl!(loader, "feature-1-title"),
            feature_1_desc: fl!(loader, "feature-1-desc"),
            feature_2_title: fl!(loader, "feature-2-title"),
            feature_2_desc: fl!(loader, "feature-2-desc"),
            feature_3_title: fl!(loader, "feature-3-title"),
            feature_3_desc: fl!(loader, "feature-3-desc"),
            footer_text: fl!(loader, "footer-text"),
            mockup_badge: fl!(loader, "mockup-badge"),
            mockup_search: fl!(loader, "mockup-search"),
            mockup_section_title: fl!(loader, "mockup-section-title"),
        }
    }

    /// `(message id, value)` pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 21] {
        [
            ("language-label", &self.language_label),
            ("share-link", &self.share_link),
            ("share-copied", &self.share_copied),
            ("hero-title", &self.hero_title),
            ("hero-subtitle", &self.hero_subtitle),
            ("email-placeholder", &self.email_placeholder),
            ("join-waitlist", &self.join_waitlist),
            ("submitting-label", &self.submitting_label),
            ("waitlist-success", &self.waitlist_success),
            ("waitlist-failed", &self.waitlist_failed),
            ("features-title", &self.features_title),
            ("feature-1-title", &self.feature_1_title),
            ("feature-1-desc", &self.feature_1_desc),
            ("feature-2-title", &self.feature_2_title),
            ("feature-2-desc", &self.feature_2_desc),
            ("feature-3-title", &self.feature_3_title),
            ("feature-3-desc", &self.feature_3_desc),
            ("footer-text", &self.footer_text),
            ("mockup-badge", &self.mockup_badge),
            ("mockup-search", &self.mockup_search),
            ("mockup-section-title", &self.mockup_section_title),
        ]
    }
}

fn loader_for(code: LanguageCode) -> FluentLanguageLoader {
    let fallback = parse_langid(FALLBACK);
    let loader = FluentLanguageLoader::new(DOMAIN, fallback.clone());
    let requested = parse_langid(code.as_str());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[requested]) {
        error!(language = %code, %err, "failed loading translations; using fallback");
        if let Err(err) = i18n_embed::select(&loader, &Localizations, &[fallback]) {
            error!(%err, "failed loading fallback translations");
        }
    }
    loader
}

fn parse_langid(tag: &str) -> LanguageIdentifier {
    tag.parse().unwrap_or_default()
}

/// List available (embedded) language folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
