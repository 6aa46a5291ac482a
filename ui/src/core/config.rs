//! Landing page configuration.
//!
//! Defaults reproduce the production deployment. The waitlist endpoint can be
//! overridden at build time with `LUPA_WAITLIST_ENDPOINT`; native builds can
//! additionally read a `lupa.toml` from the platform config directory.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Google Apps Script web app that appends waitlist rows to a sheet.
pub const DEFAULT_WAITLIST_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwOYIGnToi_5hQpzOX_8EWfbVjrzPptShJK2-1B8xN1Qavcw_aq0H9ypaftWTp3hbX1/exec";

pub const DEFAULT_SHARE_TITLE: &str = "Lupa KZ";
pub const DEFAULT_SHARE_URL: &str = "https://lupa.kz/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("waitlist endpoint must be an absolute http(s) URL, got `{0}`")]
    InvalidEndpoint(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Remote collection endpoint receiving waitlist POSTs.
    pub waitlist_endpoint: String,
    /// Title passed to the native share sheet.
    pub share_title: String,
    /// Shared URL on hosts that have no page location (desktop).
    pub share_url: String,
    /// Treat transport-level dispatch failures as success (the endpoint is
    /// opaque, so delivery can never be confirmed either way).
    pub optimistic_dispatch: bool,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            waitlist_endpoint: option_env!("LUPA_WAITLIST_ENDPOINT")
                .unwrap_or(DEFAULT_WAITLIST_ENDPOINT)
                .to_string(),
            share_title: DEFAULT_SHARE_TITLE.to_string(),
            share_url: DEFAULT_SHARE_URL.to_string(),
            optimistic_dispatch: true,
        }
    }
}

impl LandingConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidEndpoint(self.waitlist_endpoint.clone());
        let url = Url::parse(self.waitlist_endpoint.trim()).map_err(|_| invalid())?;
        match url.scheme() {
            "http" | "https" => {}
            _ => return Err(invalid()),
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(invalid()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::{Path, PathBuf};

    use tracing::{info, warn};

    use super::{ConfigError, LandingConfig};

    const CONFIG_FILE: &str = "lupa.toml";

    impl LandingConfig {
        pub fn load(path: &Path) -> Result<Self, ConfigError> {
            let raw = std::fs::read_to_string(path)?;
            Self::from_toml_str(&raw)
        }

        /// Read `lupa.toml` from the platform config directory. A missing file
        /// yields the defaults; a broken one is logged and ignored.
        pub fn load_default() -> Self {
            let Some(path) = default_config_path() else {
                return Self::default();
            };
            if !path.exists() {
                return Self::default();
            }
            match Self::load(&path) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded landing config");
                    config
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "ignoring landing config");
                    Self::default()
                }
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("kz", "Lupa", "Lupa")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}
