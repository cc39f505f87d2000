//! Backend payload shapes, decoded at the boundary.

use serde::Deserialize;
use serde_json::Value;

use finboard_core::{Category, IndicatorRecord, indicator_value_from_json};

/// Response of `/companies/search`.
///
/// The documented shape is `{"companies": [...]}`; a bare array is accepted
/// too. Anything else fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CompanyListing {
    /// `{"companies": ["..."]}`
    Wrapped {
        /// Matching names.
        companies: Vec<String>,
    },
    /// `["..."]`
    Bare(Vec<String>),
}

impl CompanyListing {
    /// The listed names, whichever shape carried them.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        match self {
            Self::Wrapped { companies } | Self::Bare(companies) => companies,
        }
    }
}

/// One `/financial-data` row. Both observed field spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct FinancialRow {
    /// Category label, code or English name.
    #[serde(alias = "idx_cl_nm")]
    pub category: String,
    /// Indicator name.
    #[serde(alias = "idx_nm")]
    pub indicator: String,
    /// Raw value (number, numeric string or null).
    #[serde(default, alias = "idx_val")]
    pub value: Option<Value>,
}

impl FinancialRow {
    /// Convert into a record, or `None` when the category is not one of the four.
    #[must_use]
    pub fn into_record(self) -> Option<IndicatorRecord> {
        let category = Category::from_label(&self.category)?;
        let value = indicator_value_from_json(self.value.as_ref());
        Some(IndicatorRecord::new(category, self.indicator.trim(), value))
    }
}

/// Response of `/health`.
///
/// Any success response means the backend is alive. The body is optional;
/// when it carries a `status` that names a failure, the backend is down.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthPayload {
    /// Self-reported state, `"healthy"` on the reference backend.
    #[serde(default)]
    pub status: Option<String>,
}

impl HealthPayload {
    /// Decode a success body, treating an empty or non-object body as "no detail".
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Whether the backend should be considered alive.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        match self.status.as_deref().map(str::trim) {
            Some(s) => !["unhealthy", "down", "error", "fail", "failed"]
                .iter()
                .any(|bad| s.eq_ignore_ascii_case(bad)),
            None => true,
        }
    }
}
