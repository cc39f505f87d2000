use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use finboard_core::connector::{
    CodeTableProvider, CompanySearchProvider, FinancialDataProvider, FinboardConnector,
    HealthProvider, IndicatorProvider,
};
use finboard_core::{
    Capability, Category, CompanyCode, FinboardError, IndicatorRecord, ReportRequest,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after a delay.
    Delayed(Duration, T),
    /// Fail immediately with the provided error.
    Fail(FinboardError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

impl<T> MockBehavior<T> {
    async fn run(self, capability: Capability) -> Result<T, FinboardError> {
        match self {
            Self::Return(v) => Ok(v),
            Self::Delayed(after, v) => {
                tokio::time::sleep(after).await;
                Ok(v)
            }
            Self::Fail(e) => Err(e),
            Self::Hang => {
                std::future::pending::<()>().await;
                Err(FinboardError::unsupported(capability.as_str()))
            }
        }
    }
}

/// Which capabilities a dynamic mock advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockProfile {
    /// Code table + per-category indicators, like the disclosure source.
    Disclosure,
    /// Name-keyed financial data, like the secondary backend.
    Backend,
}

#[derive(Default)]
struct InternalState {
    code_table: Option<MockBehavior<Vec<u8>>>,
    indicator_rules: HashMap<Category, MockBehavior<Vec<IndicatorRecord>>>,
    financial_data: Option<MockBehavior<Vec<IndicatorRecord>>>,
    company_search: Option<MockBehavior<Vec<String>>>,
    health: Option<MockBehavior<bool>>,
    calls: Vec<Capability>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for code table downloads.
    pub async fn set_code_table_behavior(&self, behavior: MockBehavior<Vec<u8>>) {
        let mut guard = self.state.lock().await;
        guard.code_table = Some(behavior);
    }

    /// Set the behavior for indicator requests of one category.
    pub async fn set_indicator_behavior(
        &self,
        category: Category,
        behavior: MockBehavior<Vec<IndicatorRecord>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.indicator_rules.insert(category, behavior);
    }

    /// Set the behavior for name-keyed financial data requests.
    pub async fn set_financial_data_behavior(&self, behavior: MockBehavior<Vec<IndicatorRecord>>) {
        let mut guard = self.state.lock().await;
        guard.financial_data = Some(behavior);
    }

    /// Set the behavior for company search.
    pub async fn set_company_search_behavior(&self, behavior: MockBehavior<Vec<String>>) {
        let mut guard = self.state.lock().await;
        guard.company_search = Some(behavior);
    }

    /// Set the behavior for health probes.
    pub async fn set_health_behavior(&self, behavior: MockBehavior<bool>) {
        let mut guard = self.state.lock().await;
        guard.health = Some(behavior);
    }

    /// Capabilities invoked so far, in call order.
    pub async fn calls(&self) -> Vec<Capability> {
        self.state.lock().await.calls.clone()
    }

    /// Number of calls made to `capability`.
    pub async fn call_count(&self, capability: Capability) -> usize {
        let guard = self.state.lock().await;
        guard.calls.iter().filter(|c| **c == capability).count()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        *guard = InternalState::default();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Calls with no configured behavior fail with `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    profile: MockProfile,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
        profile: MockProfile,
    ) -> (Arc<dyn FinboardConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            name,
            profile,
            state,
        });
        (me as Arc<dyn FinboardConnector>, controller)
    }

    // Acquire behavior snapshot without holding the lock across await points
    async fn take_behavior<T>(
        &self,
        capability: Capability,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Result<T, FinboardError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(capability);
            pick(&*guard)
        };
        match behavior {
            Some(b) => b.run(capability).await,
            None => Err(FinboardError::unsupported(capability.as_str())),
        }
    }
}

impl FinboardConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_code_table_provider(&self) -> Option<&dyn CodeTableProvider> {
        (self.profile == MockProfile::Disclosure).then_some(self as &dyn CodeTableProvider)
    }

    fn as_indicator_provider(&self) -> Option<&dyn IndicatorProvider> {
        (self.profile == MockProfile::Disclosure).then_some(self as &dyn IndicatorProvider)
    }

    fn as_financial_data_provider(&self) -> Option<&dyn FinancialDataProvider> {
        (self.profile == MockProfile::Backend).then_some(self as &dyn FinancialDataProvider)
    }

    fn as_company_search_provider(&self) -> Option<&dyn CompanySearchProvider> {
        Some(self as &dyn CompanySearchProvider)
    }

    fn as_health_provider(&self) -> Option<&dyn HealthProvider> {
        Some(self as &dyn HealthProvider)
    }
}

#[async_trait]
impl CodeTableProvider for DynamicMockConnector {
    async fn code_table(&self) -> Result<Vec<u8>, FinboardError> {
        self.take_behavior(Capability::CodeTable, |s| s.code_table.clone())
            .await
    }
}

#[async_trait]
impl IndicatorProvider for DynamicMockConnector {
    async fn indicators(
        &self,
        _code: &CompanyCode,
        category: Category,
        _req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError> {
        self.take_behavior(Capability::Indicators, |s| {
            s.indicator_rules.get(&category).cloned()
        })
        .await
    }
}

#[async_trait]
impl FinancialDataProvider for DynamicMockConnector {
    async fn financial_data(
        &self,
        _company: &str,
        _req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError> {
        self.take_behavior(Capability::FinancialData, |s| s.financial_data.clone())
            .await
    }
}

#[async_trait]
impl CompanySearchProvider for DynamicMockConnector {
    async fn search_companies(
        &self,
        _query: &str,
        limit: usize,
    ) -> Result<Vec<String>, FinboardError> {
        let mut names = self
            .take_behavior(Capability::CompanySearch, |s| s.company_search.clone())
            .await?;
        names.truncate(limit);
        Ok(names)
    }
}

#[async_trait]
impl HealthProvider for DynamicMockConnector {
    async fn health(&self) -> Result<bool, FinboardError> {
        self.take_behavior(Capability::Health, |s| s.health.clone())
            .await
    }
}
