//! finboard-mock
//!
//! - [`FixtureConnector`]: deterministic offline data source used as the
//!   degraded-mode fallback and by CI-safe demos. Its data comes from an
//!   injectable [`FixtureSet`].
//! - [`DynamicMockConnector`]: scriptable connector for orchestrator tests.
#![warn(missing_docs)]

use std::collections::HashMap;

use async_trait::async_trait;
use finboard_core::connector::{
    CodeTableProvider, CompanySearchProvider, ConnectorKey, FallbackDataProvider,
    FinancialDataProvider, FinboardConnector, HealthProvider, IndicatorProvider,
};
use finboard_core::resolve::render_code_table;
use finboard_core::{
    Category, CompanyCode, CompanyRecord, FinboardError, IndicatorRecord, ReportRequest,
    resolve_in, validate_company_name,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior, MockProfile};

/// Companies and their indicators served by a [`FixtureConnector`].
///
/// The same indicators are served for every year and report period. The
/// fallback list is what a search gets when the company is not in the set
/// and the live sources are down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureSet {
    companies: Vec<CompanyRecord>,
    indicators: HashMap<CompanyCode, Vec<IndicatorRecord>>,
    fallback: Vec<IndicatorRecord>,
}

impl FixtureSet {
    /// An empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The canned dashboard data set (six large listed companies and a
    /// representative fallback indicator list).
    #[must_use]
    pub fn canned() -> Self {
        fixtures::companies::all()
            .into_iter()
            .fold(Self::empty(), |set, company| {
                let rows = fixtures::indicators::by_code(company.code.as_str());
                set.with_company(company, rows)
            })
            .with_fallback_indicators(fixtures::indicators::fallback())
    }

    /// Replace the indicator list served for companies outside the set.
    #[must_use]
    pub fn with_fallback_indicators(mut self, indicators: Vec<IndicatorRecord>) -> Self {
        self.fallback = indicators;
        self
    }

    /// Append a company (after existing ones, in table order) with its indicators.
    #[must_use]
    pub fn with_company(mut self, company: CompanyRecord, indicators: Vec<IndicatorRecord>) -> Self {
        self.indicators.insert(company.code.clone(), indicators);
        self.companies.push(company);
        self
    }

    /// Companies in table order.
    #[must_use]
    pub fn companies(&self) -> &[CompanyRecord] {
        &self.companies
    }

    /// Indicators of a company code, empty when unknown.
    #[must_use]
    pub fn indicators_for(&self, code: &CompanyCode) -> &[IndicatorRecord] {
        self.indicators.get(code).map(Vec::as_slice).unwrap_or_default()
    }

    /// Indicators served for companies outside the set.
    #[must_use]
    pub fn fallback_indicators(&self) -> &[IndicatorRecord] {
        &self.fallback
    }
}

/// Offline connector serving a [`FixtureSet`]. Provides every capability.
pub struct FixtureConnector {
    set: FixtureSet,
}

impl Default for FixtureConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureConnector {
    /// Static connector key for reports and errors.
    pub const KEY: ConnectorKey = ConnectorKey::new("finboard-fixture");

    /// Connector over the canned data set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fixtures(FixtureSet::canned())
    }

    /// Connector over a caller-supplied data set.
    #[must_use]
    pub const fn with_fixtures(set: FixtureSet) -> Self {
        Self { set }
    }

    /// The served data set.
    #[must_use]
    pub const fn fixtures(&self) -> &FixtureSet {
        &self.set
    }
}

#[async_trait]
impl CodeTableProvider for FixtureConnector {
    async fn code_table(&self) -> Result<Vec<u8>, FinboardError> {
        Ok(render_code_table(self.set.companies()).into_bytes())
    }
}

#[async_trait]
impl IndicatorProvider for FixtureConnector {
    async fn indicators(
        &self,
        code: &CompanyCode,
        category: Category,
        _req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError> {
        Ok(self
            .set
            .indicators_for(code)
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FinancialDataProvider for FixtureConnector {
    async fn financial_data(
        &self,
        company: &str,
        _req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError> {
        let name = validate_company_name(company)?;
        let record = resolve_in(name, self.set.companies())
            .into_record()
            .ok_or_else(|| FinboardError::not_found(format!("company {name}")))?;
        Ok(self.set.indicators_for(&record.code).to_vec())
    }
}

#[async_trait]
impl CompanySearchProvider for FixtureConnector {
    async fn search_companies(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<String>, FinboardError> {
        let q = validate_company_name(query)?.to_lowercase();
        Ok(self
            .set
            .companies()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&q))
            .map(|c| c.name.clone())
            .take(limit)
            .collect())
    }
}

#[async_trait]
impl FallbackDataProvider for FixtureConnector {
    async fn fallback_indicators(
        &self,
        _req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError> {
        Ok(self.set.fallback_indicators().to_vec())
    }
}

#[async_trait]
impl HealthProvider for FixtureConnector {
    async fn health(&self) -> Result<bool, FinboardError> {
        Ok(true)
    }
}

impl FinboardConnector for FixtureConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Fixture"
    }

    fn as_code_table_provider(&self) -> Option<&dyn CodeTableProvider> {
        Some(self as &dyn CodeTableProvider)
    }
    fn as_indicator_provider(&self) -> Option<&dyn IndicatorProvider> {
        Some(self as &dyn IndicatorProvider)
    }
    fn as_financial_data_provider(&self) -> Option<&dyn FinancialDataProvider> {
        Some(self as &dyn FinancialDataProvider)
    }
    fn as_company_search_provider(&self) -> Option<&dyn CompanySearchProvider> {
        Some(self as &dyn CompanySearchProvider)
    }
    fn as_health_provider(&self) -> Option<&dyn HealthProvider> {
        Some(self as &dyn HealthProvider)
    }
    fn as_fallback_provider(&self) -> Option<&dyn FallbackDataProvider> {
        Some(self as &dyn FallbackDataProvider)
    }
}
