use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use finboard_core::connector::{FinancialDataProvider, FinboardConnector};
use finboard_core::{Category, FinboardError, IndicatorRecord, ReportRequest};

/// Name-keyed source whose answer time depends on the company asked for.
///
/// Every answering company gets a single profitability record whose value is
/// the company's position in the builder, so tests can tell answers apart.
/// Companies registered with `failing` answer with an outage after their delay;
/// unknown companies are not found at once.
pub struct DelayedBackend {
    companies: HashMap<String, (Duration, Option<f64>)>,
}

impl DelayedBackend {
    pub fn builder() -> DelayedBackendBuilder {
        DelayedBackendBuilder::default()
    }
}

#[derive(Default)]
pub struct DelayedBackendBuilder {
    companies: HashMap<String, (Duration, Option<f64>)>,
}

impl DelayedBackendBuilder {
    pub fn company(mut self, name: &str, delay: Duration) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let marker = self.companies.len() as f64 + 1.0;
        self.companies
            .insert(name.to_string(), (delay, Some(marker)));
        self
    }

    pub fn failing(mut self, name: &str, delay: Duration) -> Self {
        self.companies.insert(name.to_string(), (delay, None));
        self
    }

    pub fn build(self) -> Arc<dyn FinboardConnector> {
        Arc::new(DelayedBackend {
            companies: self.companies,
        })
    }
}

#[async_trait]
impl FinancialDataProvider for DelayedBackend {
    async fn financial_data(
        &self,
        company: &str,
        _req: &ReportRequest,
    ) -> Result<Vec<IndicatorRecord>, FinboardError> {
        let Some((delay, marker)) = self.companies.get(company).copied() else {
            return Err(FinboardError::not_found(format!("company {company}")));
        };
        tokio::time::sleep(delay).await;
        match marker {
            Some(value) => Ok(vec![IndicatorRecord::new(
                Category::Profitability,
                "ROE",
                value,
            )]),
            None => Err(FinboardError::connector("delayed-backend", "status 503")),
        }
    }
}

impl FinboardConnector for DelayedBackend {
    fn name(&self) -> &'static str {
        "delayed-backend"
    }

    fn as_financial_data_provider(&self) -> Option<&dyn FinancialDataProvider> {
        Some(self as &dyn FinancialDataProvider)
    }
}
