#![allow(dead_code)]

// Re-export helpers so tests can `use helpers::*;`
pub mod delayed_backend;

pub use delayed_backend::DelayedBackend;

use std::sync::Arc;

use finboard_core::resolve::render_code_table;
use finboard_core::{Category, CompanyRecord, FinboardConnector, IndicatorRecord};
use finboard_mock::{DynamicMockConnector, DynamicMockController, MockBehavior, MockProfile};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Code table where the exact name comes after two substring matches.
pub const SAMSUNG_TABLE: &[(&str, &str)] = &[
    ("삼성물산", "00126229"),
    ("삼성전자우", "00126999"),
    ("삼성전자", "00126380"),
];

/// Render a code table payload from `(name, code)` pairs.
pub fn code_table(entries: &[(&str, &str)]) -> Vec<u8> {
    let records: Vec<CompanyRecord> = entries
        .iter()
        .map(|(name, code)| CompanyRecord::new(*name, *code))
        .collect();
    render_code_table(&records).into_bytes()
}

pub fn rec(category: Category, name: &str, value: f64) -> IndicatorRecord {
    IndicatorRecord::new(category, name, value)
}

/// One record per category, named after the category.
pub fn one_per_category(category: Category) -> Vec<IndicatorRecord> {
    vec![rec(category, category.name(), 1.0)]
}

/// A disclosure-style mock serving `table` and one record for every category.
pub async fn disclosure(
    name: &'static str,
    table: &[(&str, &str)],
) -> (Arc<dyn FinboardConnector>, DynamicMockController) {
    let (c, ctl) = DynamicMockConnector::new_with_controller(name, MockProfile::Disclosure);
    ctl.set_code_table_behavior(MockBehavior::Return(code_table(table)))
        .await;
    for category in Category::ALL {
        ctl.set_indicator_behavior(category, MockBehavior::Return(one_per_category(category)))
            .await;
    }
    (c, ctl)
}

/// A backend-style mock answering every company with `records`.
pub async fn backend(
    name: &'static str,
    records: Vec<IndicatorRecord>,
) -> (Arc<dyn FinboardConnector>, DynamicMockController) {
    let (c, ctl) = DynamicMockConnector::new_with_controller(name, MockProfile::Backend);
    ctl.set_financial_data_behavior(MockBehavior::Return(records))
        .await;
    (c, ctl)
}
