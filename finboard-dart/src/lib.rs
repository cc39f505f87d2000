//! finboard-dart
//!
//! Public connector that implements `FinboardConnector` on top of the OpenDART
//! REST API. Exposes the bulk company code table, single-company financial
//! indicators (one classification per request) and company name search over
//! the code table.
//!
//! Credentials are read from [`DartConfig`], usually built with
//! [`DartConfig::from_env`] (`DART_API_KEY`).
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod config;
/// OpenDART payload shapes.
pub mod wire;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{DartCodeTable, DartIndicators, RealAdapter};
use async_trait::async_trait;
use finboard_core::{
    Category, CompanyCode, FinboardError, IndicatorRecord, ReportRequest,
    connector::{
        CodeTableProvider, CompanySearchProvider, ConnectorKey, FinboardConnector,
        IndicatorProvider,
    },
    search_names,
};

pub use config::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DartConfig};
use wire::{STATUS_NO_DATA, STATUS_OK};

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type CodeTableAdapter = Arc<dyn DartCodeTable>;
#[cfg(not(feature = "test-adapters"))]
type CodeTableAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type IndicatorsAdapter = Arc<dyn DartIndicators>;
#[cfg(not(feature = "test-adapters"))]
type IndicatorsAdapter = AdapterArc;

/// Public connector type. Production users will construct with `DartConnector::from_env()`.
pub struct DartConnector {
    code_table: CodeTableAdapter,
    indicators: IndicatorsAdapter,
}

impl DartConnector {
    /// Static connector key for reports and errors.
    pub const KEY: ConnectorKey = ConnectorKey::new("finboard-dart");

    /// Build against the API described by `config`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank key or unparseable base URL.
    pub fn new(config: DartConfig) -> Result<Self, FinboardError> {
        let a = RealAdapter::new(config)?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from `DART_API_KEY` / `DART_BASE_URL`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the key is missing.
    pub fn from_env() -> Result<Self, FinboardError> {
        Self::new(DartConfig::from_env()?)
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a blank key or unparseable base URL.
    pub fn with_client(http: reqwest::Client, config: DartConfig) -> Result<Self, FinboardError> {
        let a = RealAdapter::with_client(http, config)?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            code_table: adapter.clone_arc_code_table(),
            indicators: adapter.clone_arc_indicators(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            code_table: Arc::clone(&shared),
            indicators: shared,
        }
    }

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("조회된 데이")
    }

    fn normalize_error(e: FinboardError, what: &str) -> FinboardError {
        match e {
            FinboardError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    FinboardError::not_found(what.to_string())
                } else {
                    FinboardError::connector(Self::KEY.as_str(), msg)
                }
            }
            FinboardError::Other(msg) => FinboardError::connector(Self::KEY.as_str(), msg),
            other => other,
        }
    }

    fn upstream_rejected(status: &str, message: &str, what: &str) -> FinboardError {
        FinboardError::connector(
            Self::KEY.as_str(),
            format!("{what}: status {status}: {message}"),
        )
    }
}

#[async_trait]
impl CodeTableProvider for DartConnector {
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "finboard_dart::code_table", skip(self)))]
    async fn code_table(&self) -> Result<Vec<u8>, FinboardError> {
        let bytes = self
            .code_table
            .download()
            .await
            .map_err(|e| Self::normalize_error(e, "code table"))?;
        // A rejected request (bad key, quota) answers with an XML status document instead of a ZIP.
        if !bytes.starts_with(b"PK") {
            let text = String::from_utf8_lossy(&bytes);
            if let Some((status, message)) = wire::xml_status(&text) {
                if status != STATUS_OK {
                    return Err(Self::upstream_rejected(&status, &message, "code table"));
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = bytes.len(), "downloaded code table");
        Ok(bytes)
    }
}

#[async_trait]
impl IndicatorProvider for DartConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "finboard_dart::indicators",
            skip(self, req),
            fields(code = %code, category = %category),
        )
    )]
    async fn indicators(
        &self,
        code: &CompanyCode,
        category: Category,
        req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError> {
        let envelope = self
            .indicators
            .fetch(code.as_str(), req.year.as_str(), req.period.code(), category.code())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("{category} indicators for {code}")))?;

        match envelope.status.as_str() {
            STATUS_OK => Ok(envelope
                .list
                .into_iter()
                .map(|row| row.into_record(category))
                .collect()),
            STATUS_NO_DATA => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = %envelope.message, "no indicators for category");
                Ok(Vec::new())
            }
            other => Err(Self::upstream_rejected(
                other,
                &envelope.message,
                &format!("{category} indicators"),
            )),
        }
    }
}

#[async_trait]
impl CompanySearchProvider for DartConnector {
    async fn search_companies(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<String>, FinboardError> {
        let table = self.code_table().await?;
        search_names(&table, query, limit)
    }
}

impl FinboardConnector for DartConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "OpenDART"
    }

    fn as_code_table_provider(&self) -> Option<&dyn CodeTableProvider> {
        Some(self as &dyn CodeTableProvider)
    }

    fn as_indicator_provider(&self) -> Option<&dyn IndicatorProvider> {
        Some(self as &dyn IndicatorProvider)
    }

    fn as_company_search_provider(&self) -> Option<&dyn CompanySearchProvider> {
        Some(self as &dyn CompanySearchProvider)
    }
}
