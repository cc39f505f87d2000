#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use finboard_core::FinboardError;

use crate::config::DartConfig;
use crate::wire::IndicatorEnvelope;

const CONNECTOR: &str = "finboard-dart";

/// Code table abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait DartCodeTable: Send + Sync {
    /// Download the raw `corpCode.xml` payload (a ZIP archive on success).
    async fn download(&self) -> Result<Vec<u8>, FinboardError>;
}

/// Single-company indicator abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait DartIndicators: Send + Sync {
    /// Fetch one classification of indicators.
    ///
    /// Arguments are the upstream query values: `corp_code`, `bsns_year`,
    /// `reprt_code` and `idx_cl_code`.
    async fn fetch(
        &self,
        corp_code: &str,
        year: &str,
        report_code: &str,
        class_code: &str,
    ) -> Result<IndicatorEnvelope, FinboardError>;
}

/// Real adapter backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    config: DartConfig,
}

impl RealAdapter {
    /// Build an HTTP client honoring the configured timeout.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank key or unparseable base URL, and
    /// `Other` if the HTTP client cannot be constructed.
    pub fn new(config: DartConfig) -> Result<Self, FinboardError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FinboardError::Other(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Wrap an existing client.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank key or unparseable base URL.
    pub fn with_client(http: reqwest::Client, config: DartConfig) -> Result<Self, FinboardError> {
        config.validate()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<u8>, FinboardError> {
        let resp = self
            .http
            .get(self.endpoint(path))
            .query(&[("crtfc_key", self.config.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| map_http_err(&e, path))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FinboardError::connector(
                CONNECTOR,
                format!("status {}: {path}", status.as_u16()),
            ));
        }
        let body = resp.bytes().await.map_err(|e| map_http_err(&e, path))?;
        Ok(body.to_vec())
    }
}

/// Normalize transport failures into the error taxonomy.
///
/// The request URL is never included; it carries the API key.
pub(crate) fn map_http_err(e: &reqwest::Error, context: &str) -> FinboardError {
    if e.is_timeout() {
        FinboardError::connector(CONNECTOR, format!("timeout: {context}"))
    } else if let Some(status) = e.status() {
        FinboardError::connector(CONNECTOR, format!("status {}: {context}", status.as_u16()))
    } else if e.is_decode() || e.is_body() {
        FinboardError::malformed(CONNECTOR, format!("unreadable body: {context}"))
    } else if e.is_connect() {
        FinboardError::connector(CONNECTOR, format!("connection failed: {context}"))
    } else {
        FinboardError::connector(CONNECTOR, format!("request failed: {context}"))
    }
}

#[async_trait]
impl DartCodeTable for RealAdapter {
    async fn download(&self) -> Result<Vec<u8>, FinboardError> {
        self.get("corpCode.xml", &[]).await
    }
}

#[async_trait]
impl DartIndicators for RealAdapter {
    async fn fetch(
        &self,
        corp_code: &str,
        year: &str,
        report_code: &str,
        class_code: &str,
    ) -> Result<IndicatorEnvelope, FinboardError> {
        let body = self
            .get(
                "fnlttSinglIndx.json",
                &[
                    ("corp_code", corp_code),
                    ("bsns_year", year),
                    ("reprt_code", report_code),
                    ("idx_cl_code", class_code),
                ],
            )
            .await?;
        serde_json::from_slice(&body).map_err(|e| {
            FinboardError::malformed(CONNECTOR, format!("indicators for {corp_code}: {e}"))
        })
    }
}

#[cfg(feature = "test-adapters")]
impl dyn DartCodeTable {
    /// Build a `DartCodeTable` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn DartCodeTable>
    where
        F: Send + Sync + 'static + Fn() -> Result<Vec<u8>, FinboardError>,
    {
        struct FnCodeTable<F>(F);
        #[async_trait]
        impl<F> DartCodeTable for FnCodeTable<F>
        where
            F: Send + Sync + 'static + Fn() -> Result<Vec<u8>, FinboardError>,
        {
            async fn download(&self) -> Result<Vec<u8>, FinboardError> {
                (self.0)()
            }
        }
        Arc::new(FnCodeTable(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn DartIndicators {
    /// Build a `DartIndicators` from a closure (tests only).
    ///
    /// The closure receives `(corp_code, year, report_code, class_code)`.
    pub fn from_fn<F>(f: F) -> Arc<dyn DartIndicators>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String, String, String, String) -> Result<IndicatorEnvelope, FinboardError>,
    {
        struct FnIndicators<F>(F);
        #[async_trait]
        impl<F> DartIndicators for FnIndicators<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, String, String, String) -> Result<IndicatorEnvelope, FinboardError>,
        {
            async fn fetch(
                &self,
                corp_code: &str,
                year: &str,
                report_code: &str,
                class_code: &str,
            ) -> Result<IndicatorEnvelope, FinboardError> {
                (self.0)(
                    corp_code.to_string(),
                    year.to_string(),
                    report_code.to_string(),
                    class_code.to_string(),
                )
            }
        }
        Arc::new(FnIndicators(f))
    }
}

/// Hands out shared adapter handles to the connector (tests only).
///
/// Defaults answer `unsupported`, so tests override only what they exercise.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn DartCodeTable>`.
    fn clone_arc_code_table(&self) -> Arc<dyn DartCodeTable> {
        <dyn DartCodeTable>::from_fn(|| Err(FinboardError::unsupported("code-table")))
    }
    /// Clone as `Arc<dyn DartIndicators>`.
    fn clone_arc_indicators(&self) -> Arc<dyn DartIndicators> {
        <dyn DartIndicators>::from_fn(|_, _, _, _| Err(FinboardError::unsupported("indicators")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_code_table(&self) -> Arc<dyn DartCodeTable> {
        Arc::new(self.clone()) as Arc<dyn DartCodeTable>
    }
    fn clone_arc_indicators(&self) -> Arc<dyn DartIndicators> {
        Arc::new(self.clone()) as Arc<dyn DartIndicators>
    }
}
