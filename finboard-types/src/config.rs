//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::period::ReportRequest;

/// Maximum number of names returned by company search unless overridden.
pub const DEFAULT_COMPANY_SEARCH_LIMIT: usize = 10;

/// Global configuration for the `Finboard` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinboardConfig {
    /// Year and report period used for indicator requests.
    pub report: ReportRequest,
    /// Timeout for individual provider requests (one category, one code table download...).
    pub provider_timeout: Duration,
    /// Optional overall deadline for the per-category fan-out.
    /// Categories still outstanding when it expires contribute no records.
    pub request_timeout: Option<Duration>,
    /// Cap on the number of names returned by company search.
    pub company_search_limit: usize,
}

impl Default for FinboardConfig {
    fn default() -> Self {
        Self {
            report: ReportRequest::default(),
            provider_timeout: Duration::from_secs(10),
            request_timeout: None,
            company_search_limit: DEFAULT_COMPANY_SEARCH_LIMIT,
        }
    }
}
