//! Re-export of foundational types from `finboard-types`.
// Consolidated re-exports so downstream crates can depend on `finboard-core` only

pub use finboard_types::{Capability, ConnectorKey, FinboardError};

pub use finboard_types::{
    Category, CompanyCode, CompanyRecord, FiscalYear, IndicatorRecord, ReportPeriod,
    ReportRequest,
};

pub use finboard_types::{
    CompanySearchReport, ConnectorHealth, DashboardReport, HealthReport, IndicatorReport,
};

pub use finboard_types::{DEFAULT_COMPANY_SEARCH_LIMIT, FinboardConfig};
