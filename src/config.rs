//! Application configuration.
//!
//! Defaults suit the public PokeAPI; every field can be overridden from the
//! environment with [`AppConfig::from_env`] or in code with the `with_*`
//! builders.
//!
//! # Example
//!
//! ```ignore
//! use pokedex::config::AppConfig;
//!
//! let config = AppConfig::from_env()
//!     .with_language("en")
//!     .with_page_size(50);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use crate::theme::ThemeMode;

pub const ENV_API_URL: &str = "POKEDEX_API_URL";
pub const ENV_PAGE_SIZE: &str = "POKEDEX_PAGE_SIZE";
pub const ENV_LANG: &str = "POKEDEX_LANG";
pub const ENV_DATA_DIR: &str = "POKEDEX_DATA_DIR";
pub const ENV_COLOR_SCHEME: &str = "POKEDEX_COLOR_SCHEME";

/// Language used for localized ability names unless overridden.
pub const DEFAULT_LANGUAGE: &str = "pt";

/// Data directory name under the home directory.
const DATA_DIR: &str = ".pokedex";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API root, without a trailing slash.
    pub api_base_url: String,
    /// Entries per list page.
    pub page_size: u32,
    /// Language code for localized ability names.
    pub language: String,
    /// Directory of the key-value store. `None` when no home directory is known.
    pub data_dir: Option<PathBuf>,
    /// Color scheme reported by the host, if any.
    pub color_scheme: Option<String>,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            language: DEFAULT_LANGUAGE.to_string(),
            data_dir: dirs::home_dir().map(|home| home.join(DATA_DIR)),
            color_scheme: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with any `POKEDEX_*` environment variables. Values
    /// that do not parse are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_URL) {
            config = config.with_api_base_url(url);
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => tracing::warn!(value = %raw, "ignoring invalid {}", ENV_PAGE_SIZE),
            }
        }
        if let Some(language) = lookup(ENV_LANG).filter(|l| !l.trim().is_empty()) {
            config.language = language.trim().to_string();
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        config.color_scheme = lookup(ENV_COLOR_SCHEME);
        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_color_scheme(mut self, scheme: Option<String>) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Initial theme mode from the reported color scheme.
    pub fn initial_theme(&self) -> ThemeMode {
        ThemeMode::from_preference(self.color_scheme.as_deref())
    }
}
