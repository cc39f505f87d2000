//! Company and indicator records exchanged between connectors and the pipeline.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the four fixed classifications of financial indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Returns on equity/assets, margins.
    Profitability,
    /// Leverage and liquidity ratios.
    Stability,
    /// Period-over-period growth rates.
    Growth,
    /// Turnover ratios.
    Activity,
}

impl Category {
    /// Every category in the fixed order used for requests, reports and charts.
    pub const ALL: [Self; 4] = [
        Self::Profitability,
        Self::Stability,
        Self::Growth,
        Self::Activity,
    ];

    /// Classification code used by the disclosure source (`idx_cl_code`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Profitability => "M210000",
            Self::Stability => "M220000",
            Self::Growth => "M230000",
            Self::Activity => "M240000",
        }
    }

    /// Label used by the disclosure source and the secondary backend.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Profitability => "수익성",
            Self::Stability => "안정성",
            Self::Growth => "성장성",
            Self::Activity => "활동성",
        }
    }

    /// Lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Profitability => "profitability",
            Self::Stability => "stability",
            Self::Growth => "growth",
            Self::Activity => "activity",
        }
    }

    /// Parse a category from an upstream code, upstream label, or English name.
    ///
    /// Unknown labels yield `None`; callers drop such records.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let s = raw.trim();
        Self::ALL.into_iter().find(|c| {
            s == c.code() || s == c.label() || s.eq_ignore_ascii_case(c.name())
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque identifier used by the disclosure source in place of a company name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyCode(String);

impl CompanyCode {
    /// Wrap a raw code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the raw code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single entry of the bulk company code table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Registered company name.
    pub name: String,
    /// Code to use for indicator requests.
    pub code: CompanyCode,
}

impl CompanyRecord {
    /// Build a record from a name and a raw code.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: CompanyCode::new(code),
        }
    }
}

/// A single named financial ratio in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    /// Classification of the ratio.
    pub category: Category,
    /// Indicator name as reported upstream (e.g. "ROE", "부채비율").
    pub name: String,
    /// Parsed numeric value; unparseable upstream values are stored as `0.0`.
    pub value: f64,
}

impl IndicatorRecord {
    /// Construct a record.
    pub fn new(category: Category, name: impl Into<String>, value: f64) -> Self {
        Self {
            category,
            name: name.into(),
            value,
        }
    }
}
