use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with connector provider traits and allow consistent
/// Display formatting in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// End-to-end dashboard search (resolve, fetch, aggregate).
    Search,
    /// Bulk company code table download.
    CodeTable,
    /// Per-category financial indicators for a company code.
    Indicators,
    /// Flat indicator list for a company name (secondary backend).
    FinancialData,
    /// Candidate company names for a free-text query.
    CompanySearch,
    /// Liveness probe.
    Health,
    /// Canned indicators served while upstream sources are down.
    Fallback,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::CodeTable => "code-table",
            Self::Indicators => "indicators",
            Self::FinancialData => "financial-data",
            Self::CompanySearch => "company-search",
            Self::Health => "health",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
