use crate::constants::{
    DEFAULT_AUTO_REFRESH_SECS, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

/// Resolved client configuration with all values filled in (no Options).
///
/// Deserializable from a TOML file; every field has a concrete default so a
/// partial file works and the struct is safe to read without unwrapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Backend base URL the endpoints are resolved against
    pub base_url: String,
    /// Default number of announcements requested per listing
    pub page_size: usize,
    /// Seconds between refreshes in watch mode
    pub auto_refresh_secs: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            auto_refresh_secs: DEFAULT_AUTO_REFRESH_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Rejects unknown keys to catch typos, and validates that the base URL
    /// parses and the page size and refresh interval are positive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, unknown keys are
    /// present, or a value fails validation; `UrlError` for a bad base URL.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(AppError::InvalidInput(
                "Page size must be greater than 0".into(),
            ));
        }
        if self.auto_refresh_secs == 0 {
            return Err(AppError::InvalidInput(
                "Auto-refresh interval must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
