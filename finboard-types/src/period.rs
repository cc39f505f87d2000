//! Reporting interval and fiscal year selection for indicator requests.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FinboardError;

/// Fiscal reporting interval indicators are requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ReportPeriod {
    /// First-quarter interim report.
    FirstQuarter,
    /// Half-year interim report.
    HalfYear,
    /// Third-quarter interim report.
    #[default]
    ThirdQuarter,
    /// Annual business report.
    Annual,
}

impl ReportPeriod {
    /// All periods in calendar order.
    pub const ALL: [Self; 4] = [
        Self::FirstQuarter,
        Self::HalfYear,
        Self::ThirdQuarter,
        Self::Annual,
    ];

    /// Report code understood by the disclosure source (`reprt_code`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FirstQuarter => "11013",
            Self::HalfYear => "11012",
            Self::ThirdQuarter => "11014",
            Self::Annual => "11011",
        }
    }

    /// Parse a disclosure-source report code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code.trim())
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FirstQuarter => "Q1",
            Self::HalfYear => "H1",
            Self::ThirdQuarter => "Q3",
            Self::Annual => "FY",
        })
    }
}

/// A four-digit business year, e.g. `"2023"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FiscalYear(String);

impl FiscalYear {
    /// Year used when the caller does not pick one.
    pub const DEFAULT: &'static str = "2023";

    /// Validate and wrap a business year.
    ///
    /// # Errors
    /// Returns `InvalidArg` unless the trimmed input is exactly four ASCII digits.
    pub fn new(year: impl AsRef<str>) -> Result<Self, FinboardError> {
        let y = year.as_ref().trim();
        if y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(y.to_string()))
        } else {
            Err(FinboardError::InvalidArg(format!(
                "fiscal year must be four digits, got '{y}'"
            )))
        }
    }

    /// Borrow the year string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FiscalYear {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl TryFrom<String> for FiscalYear {
    type Error = FinboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FiscalYear> for String {
    fn from(y: FiscalYear) -> Self {
        y.0
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Year and period pair sent with every indicator request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Business year.
    pub year: FiscalYear,
    /// Reporting interval within the year.
    pub period: ReportPeriod,
}

impl ReportRequest {
    /// Build a request for an explicit year and period.
    #[must_use]
    pub const fn new(year: FiscalYear, period: ReportPeriod) -> Self {
        Self { year, period }
    }
}
