//! finboard-backend
//!
//! Client connector for the secondary finboard backend. The backend resolves
//! company names itself, so this connector serves name-keyed financial data
//! rather than the code table pipeline, plus company search and a health probe.
#![warn(missing_docs)]

mod config;
/// Backend payload shapes.
pub mod wire;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use finboard_core::{
    FinboardError, IndicatorRecord, ReportRequest,
    connector::{
        CompanySearchProvider, ConnectorKey, FinancialDataProvider, FinboardConnector,
        HealthProvider,
    },
};

pub use config::{BASE_URL_ENV, BackendConfig, DEFAULT_BASE_URL};
use wire::{CompanyListing, FinancialRow, HealthPayload};

/// Public connector type. Production users will construct with `BackendConnector::from_env()`.
#[derive(Clone)]
pub struct BackendConnector {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendConnector {
    /// Static connector key for reports and errors.
    pub const KEY: ConnectorKey = ConnectorKey::new("finboard-backend");

    /// Build a client for the backend described by `config`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparseable base URL and `Other` if the
    /// HTTP client cannot be constructed.
    pub fn new(config: BackendConfig) -> Result<Self, FinboardError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FinboardError::Other(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Build from `FINBOARD_BACKEND_URL` (default `http://localhost:8000`).
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparseable URL.
    pub fn from_env() -> Result<Self, FinboardError> {
        Self::new(BackendConfig::from_env())
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparseable base URL.
    pub fn with_client(http: reqwest::Client, config: BackendConfig) -> Result<Self, FinboardError> {
        config.validate()?;
        Ok(Self { http, config })
    }

    /// Configured backend root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        what: &str,
    ) -> Result<T, FinboardError> {
        let body = self.get_bytes(path, query, what).await?;
        serde_json::from_slice(&body)
            .map_err(|e| FinboardError::malformed(Self::KEY.as_str(), format!("{what}: {e}")))
    }

    async fn get_bytes(
        &self,
        path: &str,
        query: &[(&str, &str)],
        what: &str,
    ) -> Result<Vec<u8>, FinboardError> {
        let resp = self
            .http
            .get(format!("{}{path}", self.config.base_url))
            .query(query)
            .send()
            .await
            .map_err(|e| map_http_err(&e, what))?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FinboardError::not_found(what.to_string()));
        }
        if !status.is_success() {
            return Err(FinboardError::connector(
                Self::KEY.as_str(),
                format!("status {}: {what}", status.as_u16()),
            ));
        }
        let body = resp.bytes().await.map_err(|e| map_http_err(&e, what))?;
        Ok(body.to_vec())
    }
}

fn map_http_err(e: &reqwest::Error, context: &str) -> FinboardError {
    let connector = BackendConnector::KEY.as_str();
    if e.is_timeout() {
        FinboardError::connector(connector, format!("timeout: {context}"))
    } else if e.is_connect() {
        FinboardError::connector(connector, format!("connection failed: {context}"))
    } else if e.is_decode() || e.is_body() {
        FinboardError::malformed(connector, format!("unreadable body: {context}"))
    } else {
        FinboardError::connector(connector, format!("request failed: {context}: {e}"))
    }
}

#[async_trait]
impl FinancialDataProvider for BackendConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "finboard_backend::financial_data", skip(self, req), fields(year = %req.year))
    )]
    async fn financial_data(
        &self,
        company: &str,
        req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError> {
        let rows: Vec<FinancialRow> = self
            .get_json(
                "/financial-data",
                &[
                    ("company", company),
                    ("year", req.year.as_str()),
                    ("reprt_code", req.period.code()),
                ],
                &format!("financial data for {company}"),
            )
            .await?;
        let total = rows.len();
        let records: Vec<IndicatorRecord> =
            rows.into_iter().filter_map(FinancialRow::into_record).collect();
        if records.len() < total {
            #[cfg(feature = "tracing")]
            tracing::debug!(dropped = total - records.len(), "dropped rows with unknown categories");
        }
        Ok(records)
    }
}

#[async_trait]
impl CompanySearchProvider for BackendConnector {
    async fn search_companies(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<String>, FinboardError> {
        let listing: CompanyListing = self
            .get_json(
                "/companies/search",
                &[("query", query)],
                &format!("company search for {query}"),
            )
            .await?;
        let mut names = listing.into_names();
        names.truncate(limit);
        Ok(names)
    }
}

#[async_trait]
impl HealthProvider for BackendConnector {
    async fn health(&self) -> Result<bool, FinboardError> {
        let body = self.get_bytes("/health", &[], "health").await?;
        Ok(HealthPayload::from_body(&body).is_healthy())
    }
}

impl FinboardConnector for BackendConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "finboard backend"
    }

    fn as_financial_data_provider(&self) -> Option<&dyn FinancialDataProvider> {
        Some(self as &dyn FinancialDataProvider)
    }

    fn as_company_search_provider(&self) -> Option<&dyn CompanySearchProvider> {
        Some(self as &dyn CompanySearchProvider)
    }

    fn as_health_provider(&self) -> Option<&dyn HealthProvider> {
        Some(self as &dyn HealthProvider)
    }
}
