// HTTP adapter configuration

use fieldsync_core::error::{AppError, Result};
use reqwest::Url;

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "FIELDSYNC_API_URL";

/// Used when no base URL is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend location
#[derive(Clone, Debug)]
pub struct HttpConfig {
    base_url: Url,
}

impl HttpConfig {
    /// Parse and validate a base URL (http or https)
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| AppError::Config(format!("Invalid API base URL '{}': {}", base_url, e)))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "API base URL must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        Ok(Self { base_url })
    }

    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - FIELDSYNC_API_URL: backend base URL (default: http://localhost:8000)
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/jobs`
    pub fn collection_url(&self) -> Result<Url> {
        self.endpoint(&["api", "jobs"])
    }

    /// `{base}/api/jobs/{id}`, id encoded as a single path segment
    pub fn record_url(&self, id: &str) -> Result<Url> {
        self.endpoint(&["api", "jobs", id])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("Cannot append path to '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
