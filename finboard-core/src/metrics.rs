//! Key metric extraction and traffic-light status.
//!
//! Upstream indicator names vary between sources (Korean labels from the
//! disclosure source, English names from the backend). Metrics are picked out
//! by keyword; the first rule whose keyword occurs in the lowercased name
//! claims the record, and a later record for the same metric overwrites an
//! earlier one.

use serde::{Deserialize, Serialize};

use crate::{Category, IndicatorRecord};

/// Twelve headline ratios, three per category. Missing metrics are `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct KeyMetrics {
    pub roe: f64,
    pub roa: f64,
    pub net_profit_margin: f64,
    pub debt_ratio: f64,
    pub current_ratio: f64,
    pub quick_ratio: f64,
    pub revenue_growth: f64,
    pub asset_growth: f64,
    pub equity_growth: f64,
    pub asset_turnover: f64,
    pub inventory_turnover: f64,
    pub receivable_turnover: f64,
}

#[derive(Clone, Copy)]
enum Slot {
    Roe,
    Roa,
    NetProfitMargin,
    DebtRatio,
    CurrentRatio,
    QuickRatio,
    RevenueGrowth,
    AssetGrowth,
    EquityGrowth,
    AssetTurnover,
    InventoryTurnover,
    ReceivableTurnover,
}

// First matching rule wins, so a name is never counted twice.
const RULES: &[(&[&str], Slot)] = &[
    (&["roe", "자기자본이익률"], Slot::Roe),
    (&["roa", "총자산이익률"], Slot::Roa),
    (&["순이익률", "net profit margin"], Slot::NetProfitMargin),
    (&["부채비율", "debt ratio"], Slot::DebtRatio),
    (&["유동비율", "current ratio"], Slot::CurrentRatio),
    (&["당좌비율", "quick ratio"], Slot::QuickRatio),
    (&["매출성장률", "revenue growth"], Slot::RevenueGrowth),
    (&["자산성장률", "asset growth"], Slot::AssetGrowth),
    (&["자본성장률", "equity growth"], Slot::EquityGrowth),
    (&["총자산회전율", "asset turnover"], Slot::AssetTurnover),
    (&["재고자산회전율", "inventory turnover"], Slot::InventoryTurnover),
    (&["매출채권회전율", "receivable turnover"], Slot::ReceivableTurnover),
];

impl KeyMetrics {
    /// Collect key metrics from indicator records by name keyword.
    #[must_use]
    pub fn from_indicators(indicators: &[IndicatorRecord]) -> Self {
        let mut metrics = Self::default();
        for record in indicators {
            let name = record.name.to_lowercase();
            if let Some((_, slot)) = RULES
                .iter()
                .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
            {
                *metrics.slot(*slot) = record.value;
            }
        }
        metrics
    }

    fn slot(&mut self, slot: Slot) -> &mut f64 {
        match slot {
            Slot::Roe => &mut self.roe,
            Slot::Roa => &mut self.roa,
            Slot::NetProfitMargin => &mut self.net_profit_margin,
            Slot::DebtRatio => &mut self.debt_ratio,
            Slot::CurrentRatio => &mut self.current_ratio,
            Slot::QuickRatio => &mut self.quick_ratio,
            Slot::RevenueGrowth => &mut self.revenue_growth,
            Slot::AssetGrowth => &mut self.asset_growth,
            Slot::EquityGrowth => &mut self.equity_growth,
            Slot::AssetTurnover => &mut self.asset_turnover,
            Slot::InventoryTurnover => &mut self.inventory_turnover,
            Slot::ReceivableTurnover => &mut self.receivable_turnover,
        }
    }
}

/// Traffic-light status of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    /// Healthy.
    Good,
    /// Borderline, or not a finite number.
    Warning,
    /// Weak.
    Poor,
}

/// Status of `value` for a metric of `category`.
///
/// Stability metrics (debt ratios) are better when lower; every other
/// category is better when higher.
#[must_use]
pub fn metric_status(category: Category, value: f64) -> MetricStatus {
    if !value.is_finite() {
        return MetricStatus::Warning;
    }
    let (good, warning) = match category {
        Category::Profitability => (value > 10.0, value > 5.0),
        Category::Stability => (value < 200.0, value < 300.0),
        Category::Growth => (value > 10.0, value > 5.0),
        Category::Activity => (value > 1.0, value > 0.5),
    };
    if good {
        MetricStatus::Good
    } else if warning {
        MetricStatus::Warning
    } else {
        MetricStatus::Poor
    }
}
