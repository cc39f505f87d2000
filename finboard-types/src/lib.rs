//! Shared finboard data model, error taxonomy, configuration primitives and report envelopes.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod model;
mod period;
mod reports;

pub use capability::Capability;
pub use config::{DEFAULT_COMPANY_SEARCH_LIMIT, FinboardConfig};
pub use connector::ConnectorKey;
pub use error::FinboardError;
pub use model::{Category, CompanyCode, CompanyRecord, IndicatorRecord};
pub use period::{FiscalYear, ReportPeriod, ReportRequest};
pub use reports::{
    CompanySearchReport, ConnectorHealth, DashboardReport, HealthReport, IndicatorReport,
};
