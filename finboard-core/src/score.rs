//! Category scoring: per-category 0-100 scores, an overall letter grade and
//! qualitative tiers for single indicator values.
//!
//! Each category is reduced to the arithmetic mean of its values and mapped
//! onto `[0, 100]` by a fixed linear transform:
//!
//! | category      | transform             |
//! |---------------|-----------------------|
//! | Profitability | `mean * 5`            |
//! | Stability     | `mean / 2`            |
//! | Growth        | `(mean + 20) * 2.5`   |
//! | Activity      | `mean * 20`           |
//!
//! The overall score is the unweighted mean of the four category scores. An
//! empty category scores `transform(0)`; it is never excluded and never NaN.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Category, DashboardReport, IndicatorRecord};

/// Letter grade derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// `>= 80`
    APlus,
    /// `>= 70`
    A,
    /// `>= 60`
    B,
    /// `>= 50`
    C,
    /// Everything below 50.
    D,
}

impl Grade {
    /// Rendered letter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Descriptive label shown next to the letter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::APlus => "excellent",
            Self::A => "very good",
            Self::B => "good",
            Self::C => "fair",
            Self::D => "needs improvement",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized score of one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category scored.
    pub category: Category,
    /// Score in `[0, 100]`.
    pub normalized_score: f64,
}

/// Overall score with its letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallGrade {
    /// Mean of the four category scores, in `[0, 100]`.
    pub score: f64,
    /// Grade for `score`.
    pub letter: Grade,
}

/// Full scoring result for one company.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    /// One score per category, in `Category::ALL` order.
    pub per_category: [CategoryScore; 4],
    /// Overall score and grade.
    pub overall: OverallGrade,
}

impl Scorecard {
    /// Score of a single category.
    #[must_use]
    pub fn category(&self, category: Category) -> f64 {
        self.per_category
            .iter()
            .find(|s| s.category == category)
            .map_or(0.0, |s| s.normalized_score)
    }
}

/// Mean value of `category` across `indicators`, `0.0` when it has no records.
#[must_use]
pub fn category_mean(indicators: &[IndicatorRecord], category: Category) -> f64 {
    let (sum, count) = indicators
        .iter()
        .filter(|r| r.category == category)
        .fold((0.0_f64, 0_u32), |(sum, n), r| (sum + r.value, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Map a category mean onto `[0, 100]`.
#[must_use]
pub fn normalize(category: Category, mean: f64) -> f64 {
    let raw = match category {
        Category::Profitability => mean * 5.0,
        Category::Stability => mean / 2.0,
        Category::Growth => (mean + 20.0) * 2.5,
        Category::Activity => mean * 20.0,
    };
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

/// Grade for an overall score; lower bounds are inclusive.
#[must_use]
pub fn grade_for(score: f64) -> Grade {
    if score >= 80.0 {
        Grade::APlus
    } else if score >= 70.0 {
        Grade::A
    } else if score >= 60.0 {
        Grade::B
    } else if score >= 50.0 {
        Grade::C
    } else {
        Grade::D
    }
}

/// Score a company's indicators.
///
/// Pure and deterministic: the same slice always yields a bit-identical result.
#[must_use]
pub fn score(indicators: &[IndicatorRecord]) -> Scorecard {
    let per_category = Category::ALL.map(|category| CategoryScore {
        category,
        normalized_score: normalize(category, category_mean(indicators, category)),
    });
    let total: f64 = per_category.iter().map(|s| s.normalized_score).sum();
    #[allow(clippy::cast_precision_loss)]
    let overall = total / per_category.len() as f64;
    Scorecard {
        per_category,
        overall: OverallGrade {
            score: overall,
            letter: grade_for(overall),
        },
    }
}

/// Scoring for report envelopes that carry indicator records.
pub trait ReportScoring {
    /// Score the report's indicators.
    fn scorecard(&self) -> Scorecard;
}

impl ReportScoring for DashboardReport {
    fn scorecard(&self) -> Scorecard {
        score(&self.indicators)
    }
}

/// Qualitative tier of a single indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Meets the top threshold.
    Excellent,
    /// Meets the second threshold.
    Good,
    /// Meets the third threshold.
    Average,
    /// Everything else.
    Poor,
}

impl Tier {
    /// Tiers in threshold table order.
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Average, Self::Poor];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }
}

/// A tier together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Selected tier.
    pub tier: Tier,
    /// Label for `tier`.
    pub label: &'static str,
}

impl From<Tier> for Annotation {
    fn from(tier: Tier) -> Self {
        Self {
            tier,
            label: tier.label(),
        }
    }
}

const fn thresholds(category: Category) -> [f64; 4] {
    match category {
        Category::Profitability => [15.0, 10.0, 5.0, 0.0],
        Category::Stability => [200.0, 150.0, 100.0, 0.0],
        Category::Growth => [20.0, 10.0, 0.0, -10.0],
        Category::Activity => [5.0, 3.0, 1.0, 0.0],
    }
}

/// Qualitative tier of a single value: the first tier whose threshold the value
/// meets, or `Poor` when none does (NaN included).
#[must_use]
pub fn annotate(category: Category, value: f64) -> Annotation {
    let tier = Tier::ALL
        .into_iter()
        .zip(thresholds(category))
        .find(|&(_, threshold)| value >= threshold)
        .map_or(Tier::Poor, |(tier, _)| tier);
    Annotation::from(tier)
}
