//! OpenDART payload shapes.

use serde::Deserialize;
use serde_json::Value;

use finboard_core::{Category, IndicatorRecord, indicator_value_from_json};

/// Upstream status meaning success.
pub const STATUS_OK: &str = "000";
/// Upstream status meaning "no data for this query".
pub const STATUS_NO_DATA: &str = "013";

/// Envelope of `fnlttSinglIndx.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorEnvelope {
    /// Three-digit upstream status code.
    pub status: String,
    /// Upstream message accompanying `status`.
    #[serde(default)]
    pub message: String,
    /// Indicator rows; absent when `status` is not `000`.
    #[serde(default)]
    pub list: Vec<IndicatorRow>,
}

/// One indicator row. Only the fields the dashboard reads are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorRow {
    /// Indicator name, e.g. `ROE` or `부채비율`.
    #[serde(default)]
    pub idx_nm: String,
    /// Raw value: usually a numeric string, sometimes empty or null.
    #[serde(default)]
    pub idx_val: Option<Value>,
}

impl IndicatorRow {
    /// Convert into a record of `category`; unparseable values become `0.0`.
    #[must_use]
    pub fn into_record(self, category: Category) -> IndicatorRecord {
        let value = indicator_value_from_json(self.idx_val.as_ref());
        IndicatorRecord::new(category, self.idx_nm.trim(), value)
    }
}

/// Status and message of an XML error document, e.g. a code table request
/// rejected for an invalid key.
#[must_use]
pub fn xml_status(text: &str) -> Option<(String, String)> {
    let status = between(text, "<status>", "</status>")?.trim().to_string();
    let message = between(text, "<message>", "</message>")
        .unwrap_or_default()
        .trim()
        .to_string();
    Some((status, message))
}

fn between<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let end = text[start..].find(close)? + start;
    Some(&text[start..end])
}
