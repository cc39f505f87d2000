use std::time::Duration;

use serde::{Deserialize, Serialize};

use finboard_core::FinboardError;

/// Backend root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Environment variable overriding the backend root.
pub const BASE_URL_ENV: &str = "FINBOARD_BACKEND_URL";

/// Connection settings for the secondary backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend root without a trailing slash.
    pub base_url: String,
    /// Blanket HTTP client timeout.
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl BackendConfig {
    /// Settings for a backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Read `FINBOARD_BACKEND_URL`, falling back to `http://localhost:8000`.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Override the backend root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the HTTP client timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), FinboardError> {
        url::Url::parse(&self.base_url)
            .map(|_| ())
            .map_err(|e| FinboardError::InvalidArg(format!("invalid backend url: {e}")))
    }
}
