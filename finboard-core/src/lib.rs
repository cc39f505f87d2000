//! finboard-core
//!
//! Core types, traits, and pure logic shared across the finboard ecosystem.
//!
//! - `types`: domain model, report envelopes and the error taxonomy.
//! - `connector`: the `FinboardConnector` trait and capability provider traits.
//! - `resolve`: company name to company code resolution over the bulk code table.
//! - `score`: per-category normalization, overall grade and qualitative tiers.
//! - `metrics`: keyword-based key metric extraction with traffic-light status.
//! - `value`: lenient parsing of upstream indicator values.
//!
//! Everything outside `connector` is synchronous and side-effect free; the
//! orchestrator in the `finboard` crate owns all I/O.
#![warn(missing_docs)]

/// Connector capability traits and the primary `FinboardConnector` interface.
pub mod connector;
pub mod metrics;
pub mod resolve;
pub mod score;
pub mod types;
pub mod value;

pub use connector::FinboardConnector;
pub use metrics::{KeyMetrics, MetricStatus, metric_status};
pub use resolve::{MatchKind, Resolution, resolve, resolve_in, search_names, validate_company_name};
pub use score::{
    Annotation, CategoryScore, Grade, OverallGrade, ReportScoring, Scorecard, Tier, annotate,
    grade_for, score,
};
pub use types::*;
pub use value::{indicator_value_from_json, parse_indicator_value};
