use std::sync::Arc;
use std::time::Duration;

use finboard_core::{FinboardConnector, FinboardError};
use finboard_types::{FinboardConfig, FiscalYear, ReportPeriod, ReportRequest};

/// Orchestrator that routes dashboard requests across registered data sources.
pub struct Finboard {
    pub(crate) connectors: Vec<Arc<dyn FinboardConnector>>,
    pub(crate) cfg: FinboardConfig,
}

/// Builder for constructing a `Finboard` orchestrator with custom configuration.
pub struct FinboardBuilder {
    connectors: Vec<Arc<dyn FinboardConnector>>,
    cfg: FinboardConfig,
}

impl Default for FinboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FinboardBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Starts with no connectors; register at least one via [`Self::with_connector`].
    /// Indicators are requested for the 2023 third-quarter report with a 10s
    /// per-provider timeout and no overall deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: FinboardConfig::default(),
        }
    }

    /// Register a data source.
    ///
    /// Registration order is the fallback order: the first source able to
    /// answer wins, later ones are consulted only when earlier ones fail. Put
    /// an offline fixture last to get a degraded-mode fallback.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn FinboardConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set year and report period in one go.
    #[must_use]
    pub fn report(mut self, request: ReportRequest) -> Self {
        self.cfg.report = request;
        self
    }

    /// Set the business year indicators are requested for.
    #[must_use]
    pub fn year(mut self, year: FiscalYear) -> Self {
        self.cfg.report.year = year;
        self
    }

    /// Set the report period indicators are requested for.
    #[must_use]
    pub const fn report_period(mut self, period: ReportPeriod) -> Self {
        self.cfg.report.period = period;
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Bounds each single upstream call: one code table download, one
    /// category of indicators, one company search.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for fan-outs (indicator categories, health probes).
    ///
    /// Indicator categories still outstanding when it expires contribute no
    /// records and are reported as `RequestTimeout` warnings.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Cap the number of names returned by company search.
    #[must_use]
    pub const fn company_search_limit(mut self, limit: usize) -> Self {
        self.cfg.company_search_limit = limit;
        self
    }

    /// Build the `Finboard` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`Self::with_connector`] or the company search limit is zero.
    pub fn build(self) -> Result<Finboard, FinboardError> {
        if self.connectors.is_empty() {
            return Err(FinboardError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.company_search_limit == 0 {
            return Err(FinboardError::InvalidArg(
                "company search limit must be at least 1".to_string(),
            ));
        }
        Ok(Finboard {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute an error to `connector` unless it already carries its origin.
pub fn tag_err(connector: &str, e: FinboardError) -> FinboardError {
    match e {
        e @ (FinboardError::NotFound { .. }
        | FinboardError::InvalidArg(_)
        | FinboardError::ProviderTimeout { .. }
        | FinboardError::Connector { .. }
        | FinboardError::Malformed { .. }
        | FinboardError::RequestTimeout { .. }
        | FinboardError::AllProvidersTimedOut { .. }
        | FinboardError::AllProvidersFailed(_)) => e,
        other => FinboardError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Bound `fut` by the dashboard call's overall deadline, if any.
///
/// Expiry is reported as `RequestTimeout` for `capability`.
pub(crate) async fn with_request_deadline<T, Fut>(
    capability: &str,
    deadline: Option<Duration>,
    fut: Fut,
) -> Result<T, FinboardError>
where
    Fut: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| FinboardError::request_timeout(capability)),
        None => Ok(fut.await),
    }
}

impl Finboard {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "finboard::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, FinboardError>
    where
        Fut: core::future::Future<Output = Result<T, FinboardError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(FinboardError::provider_timeout(connector_name, capability)))
    }

    /// Start building a new `Finboard` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use finboard::Finboard;
    /// use finboard_dart::DartConnector;
    /// use finboard_mock::FixtureConnector;
    ///
    /// let finboard = Finboard::builder()
    ///     .with_connector(Arc::new(DartConnector::from_env()?))
    ///     .with_connector(Arc::new(FixtureConnector::new()))
    ///     .provider_timeout(std::time::Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> FinboardBuilder {
        FinboardBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FinboardConfig {
        &self.cfg
    }

    /// Names of the registered connectors, in fallback order.
    #[must_use]
    pub fn connector_names(&self) -> Vec<&'static str> {
        self.connectors.iter().map(|c| c.name()).collect()
    }
}
