//! finboard looks up a listed company by name and grades its financial health.
//!
//! Overview
//! - Routes requests to connectors that implement the `finboard_core` contracts.
//! - Resolves a free-text company name to the disclosure source's company code
//!   (exact match first, then the first substring match in table order).
//! - Fetches the four indicator categories (profitability, stability, growth,
//!   activity) concurrently; a failed category contributes no records.
//! - Scores each category on a 0-100 scale and assigns an overall letter grade.
//!
//! Key behaviors and trade-offs
//! - Fallback: connectors are consulted in registration order. A live source
//!   that is unreachable, answers with garbage or times out hands over to the
//!   next one; registering `finboard_mock::FixtureConnector` last gives an
//!   offline degraded mode. Blank input and unknown companies end the search.
//! - Timeouts: every provider call is bounded by `provider_timeout`; an
//!   optional `request_timeout` bounds the indicator fan-out as a whole.
//! - Overlapping searches: [`SearchSession`] tags each search with a
//!   generation and marks results that a newer search overtook.
//! - No caching and no retries.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use finboard::{Finboard, ReportScoring};
//! use finboard_dart::DartConnector;
//! use finboard_mock::FixtureConnector;
//!
//! let finboard = Finboard::builder()
//!     .with_connector(Arc::new(DartConnector::from_env()?))
//!     .with_connector(Arc::new(FixtureConnector::new()))
//!     .build()?;
//!
//! let report = finboard.search("삼성전자").await?;
//! let card = report.scorecard();
//! println!("{}: {} ({:.1})", report.query, card.overall.letter, card.overall.score);
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;
mod session;

pub use crate::core::{Finboard, FinboardBuilder};
pub use router::util::{join_within, no_source_answered};
pub use session::{SearchOutcome, SearchSession};

// Re-export core types for convenience
pub use finboard_core::{
    Annotation, Capability, Category, CategoryScore, CompanyCode, CompanyRecord,
    CompanySearchReport, ConnectorHealth, DashboardReport, FinboardConfig, FinboardConnector,
    FinboardError, FiscalYear, Grade, HealthReport, IndicatorRecord, IndicatorReport, KeyMetrics,
    MatchKind, MetricStatus, OverallGrade, ReportPeriod, ReportRequest, ReportScoring, Scorecard,
    Tier, annotate, grade_for, metric_status, score,
};
