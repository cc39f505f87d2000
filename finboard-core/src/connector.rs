use async_trait::async_trait;

use crate::{Category, CompanyCode, FinboardError, IndicatorRecord, ReportRequest};
pub use finboard_types::ConnectorKey;

/// Focused role trait for connectors that can download the bulk company code table.
#[async_trait]
pub trait CodeTableProvider: Send + Sync {
    /// Download the full code table as raw bytes (ZIP archive or XML text).
    async fn code_table(&self) -> Result<Vec<u8>, FinboardError>;
}

/// Focused role trait for connectors that serve per-category indicators for a company code.
#[async_trait]
pub trait IndicatorProvider: Send + Sync {
    /// Fetch the indicators of a single category.
    ///
    /// Every returned record must carry `category`. Values that do not parse
    /// upstream are reported as `0.0`, not dropped.
    async fn indicators(
        &self,
        code: &CompanyCode,
        category: Category,
        req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError>;
}

/// Focused role trait for connectors that resolve a company name themselves and
/// return its flat indicator list (the secondary backend, offline fixtures).
#[async_trait]
pub trait FinancialDataProvider: Send + Sync {
    /// Fetch all indicators for `company` for the requested year and period.
    ///
    /// Returns `NotFound` when the source knows no such company.
    async fn financial_data(
        &self,
        company: &str,
        req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError>;
}

/// Focused role trait for connectors that list candidate company names.
#[async_trait]
pub trait CompanySearchProvider: Send + Sync {
    /// Return at most `limit` names matching `query`, in source order.
    async fn search_companies(&self, query: &str, limit: usize)
    -> Result<Vec<String>, FinboardError>;
}

/// Focused role trait for connectors that expose a liveness probe.
#[async_trait]
pub trait HealthProvider: Send + Sync {
    /// Returns `Ok(true)` when the remote side reports itself healthy.
    async fn health(&self) -> Result<bool, FinboardError>;
}

/// Focused role trait for offline sources that can stand in for an unreachable
/// upstream with a fixed indicator list.
#[async_trait]
pub trait FallbackDataProvider: Send + Sync {
    /// The canned indicator list served when the requested company is unknown
    /// to this source and every earlier source failed.
    async fn fallback_indicators(
        &self,
        req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError>;
}

/// Primary connector interface implemented by every data source.
///
/// Capabilities are advertised by returning a trait object from the matching
/// `as_*_provider` accessor; the default for each is `None`.
pub trait FinboardConnector: Send + Sync {
    /// A stable identifier used in reports and errors (e.g. "finboard-dart").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for code table downloads.
    fn as_code_table_provider(&self) -> Option<&dyn CodeTableProvider> {
        None
    }

    /// If implemented, returns a trait object for per-category indicators.
    fn as_indicator_provider(&self) -> Option<&dyn IndicatorProvider> {
        None
    }

    /// If implemented, returns a trait object for name-keyed financial data.
    fn as_financial_data_provider(&self) -> Option<&dyn FinancialDataProvider> {
        None
    }

    /// If implemented, returns a trait object for company name search.
    fn as_company_search_provider(&self) -> Option<&dyn CompanySearchProvider> {
        None
    }

    /// If implemented, returns a trait object for liveness probes.
    fn as_health_provider(&self) -> Option<&dyn HealthProvider> {
        None
    }

    /// If implemented, returns a trait object for the canned degraded-mode dataset.
    fn as_fallback_provider(&self) -> Option<&dyn FallbackDataProvider> {
        None
    }

    /// Whether this connector can run the full resolve-then-fetch pipeline on its own.
    fn resolves_codes(&self) -> bool {
        self.as_code_table_provider().is_some() && self.as_indicator_provider().is_some()
    }
}
