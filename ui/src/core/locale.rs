//! Language codes and the active-locale selector.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Closed set of languages the landing page ships with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Kazakh.
    #[default]
    Kk,
    /// English.
    En,
    /// Russian.
    Ru,
}

impl LanguageCode {
    /// All supported codes in switcher order.
    pub const ALL: [Self; 3] = [Self::Kk, Self::En, Self::Ru];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kk => "kk",
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Upper-case label shown on the switcher buttons.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kk => "KK",
            Self::En => "EN",
            Self::Ru => "RU",
        }
    }

    /// Stable position inside [`LanguageCode::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Kk => 0,
            Self::En => 1,
            Self::Ru => 2,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code `{0}`")]
pub struct UnknownLanguage(pub String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "kk" => Ok(Self::Kk),
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Holds the active language. Catalog lookups always go through the single
/// code stored here, so a switch is visible everywhere at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleSelector {
    current: LanguageCode,
}

impl LocaleSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> LanguageCode {
        self.current
    }

    /// Switch to `code`. Unknown codes are ignored and `false` is returned.
    pub fn select(&mut self, code: &str) -> bool {
        match code.parse::<LanguageCode>() {
            Ok(next) => {
                self.set(next);
                true
            }
            Err(err) => {
                debug!(%err, "ignoring language switch");
                false
            }
        }
    }

    pub fn set(&mut self, next: LanguageCode) {
        if next != self.current {
            debug!(from = %self.current, to = %next, "language switched");
        }
        self.current = next;
    }
}
