use std::fmt;
use std::time::Duration;

use finboard_core::FinboardError;

/// Production OpenDART API root.
pub const DEFAULT_BASE_URL: &str = "https://opendart.fss.or.kr/api";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DART_API_KEY";
/// Environment variable overriding the API root.
pub const BASE_URL_ENV: &str = "DART_BASE_URL";

/// Connection settings for the OpenDART API.
///
/// The API key is never logged; `Debug` redacts it.
#[derive(Clone)]
pub struct DartConfig {
    /// `crtfc_key` sent with every request.
    pub api_key: String,
    /// API root without a trailing slash, e.g. `https://opendart.fss.or.kr/api`.
    pub base_url: String,
    /// Blanket HTTP client timeout.
    pub timeout: Duration,
}

impl DartConfig {
    /// Settings for the production API with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Read settings from `DART_API_KEY` and, optionally, `DART_BASE_URL`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `DART_API_KEY` is unset or blank.
    pub fn from_env() -> Result<Self, FinboardError> {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| FinboardError::InvalidArg(format!("{API_KEY_ENV} is not set")))?;
        let cfg = Self::new(key.trim());
        match std::env::var(BASE_URL_ENV) {
            Ok(base) if !base.trim().is_empty() => Ok(cfg.with_base_url(base.trim())),
            _ => Ok(cfg),
        }
    }

    /// Override the API root (tests point this at a local mock server).
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
        if self.api_key.trim().is_empty() {
            return Err(FinboardError::InvalidArg(
                "OpenDART API key must not be empty".to_string(),
            ));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| FinboardError::InvalidArg(format!("invalid OpenDART base url: {e}")))?;
        Ok(())
    }
}

impl fmt::Debug for DartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DartConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
