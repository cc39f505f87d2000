//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::FinboardError;
use crate::model::{Category, CompanyCode, CompanyRecord, IndicatorRecord};
use crate::period::ReportRequest;

/// Outcome of the per-category indicator fan-out for one company code.
///
/// Categories whose request failed contribute no records; the failure is kept
/// in `warnings` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    /// Company code the indicators were requested for.
    pub code: CompanyCode,
    /// Year and period that were requested.
    pub request: ReportRequest,
    /// Concatenated records of every category that answered.
    pub indicators: Vec<IndicatorRecord>,
    /// Categories that contributed no records because their request failed.
    pub failed_categories: Vec<Category>,
    /// Non-fatal issues encountered while fetching.
    pub warnings: Vec<FinboardError>,
}

/// Result of a dashboard search for a free-text company name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Trimmed company name as searched.
    pub query: String,
    /// Resolved company, when the answering source resolves names to codes.
    pub company: Option<CompanyRecord>,
    /// Name of the connector that produced the indicators.
    pub source: String,
    /// Year and period that were requested.
    pub request: ReportRequest,
    /// Indicator records, in fixed category order.
    pub indicators: Vec<IndicatorRecord>,
    /// True when earlier sources failed and a later one (e.g. the offline fixture) answered.
    pub degraded: bool,
    /// Non-fatal issues: failed categories, sources skipped before `source` answered.
    pub warnings: Vec<FinboardError>,
}

impl DashboardReport {
    /// Records of a single category, in upstream order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &IndicatorRecord> {
        self.indicators
            .iter()
            .filter(move |r| r.category == category)
    }
}

/// Candidate company names for a free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CompanySearchReport {
    /// Query as searched.
    pub query: String,
    /// Matching names, in source order.
    pub companies: Vec<String>,
    /// Name of the connector that answered.
    pub source: String,
    /// Sources that failed before `source` answered.
    pub warnings: Vec<FinboardError>,
}

/// Liveness of a single connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectorHealth {
    /// Connector name.
    pub connector: String,
    /// Whether the connector reported itself alive.
    pub healthy: bool,
    /// Failure observed while probing, if any.
    pub error: Option<FinboardError>,
}

/// Liveness of every connector able to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HealthReport {
    /// One entry per probed connector, in registration order.
    pub connectors: Vec<ConnectorHealth>,
}

impl HealthReport {
    /// True when at least one connector was probed and all of them are alive.
    #[must_use]
    pub fn all_healthy(&self) -> bool {
        !self.connectors.is_empty() && self.connectors.iter().all(|c| c.healthy)
    }
}
