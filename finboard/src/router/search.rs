use finboard_core::{
    Capability, Category, DashboardReport, FinboardConnector, FinboardError, ReportRequest,
    Resolution, resolve, validate_company_name,
};

use crate::Finboard;
use crate::core::tag_err;
use crate::router::util::no_source_answered;

impl Finboard {
    /// Look up a company by name and gather its indicators for the configured report.
    ///
    /// Behavior and trade-offs:
    /// - The name is trimmed; empty input fails with `InvalidArg` before any
    ///   connector is contacted.
    /// - Connectors are tried in registration order. One that serves the code
    ///   table and per-category indicators resolves the name to a company code
    ///   (exact match first, then the first substring match) and fetches the
    ///   four categories concurrently. One that only serves name-keyed
    ///   financial data is asked for the company directly.
    /// - `InvalidArg` and `NotFound` end the search. Outages, malformed
    ///   payloads and timeouts fall through to the next connector; the answer
    ///   is then flagged `degraded` and carries the skipped failures as warnings.
    /// - A connector whose four categories all failed counts as unavailable.
    /// - Once a source has failed, an offline connector that does not know the
    ///   company serves its canned indicator list (with `company: None`)
    ///   instead of reporting `NotFound`.
    ///
    /// # Errors
    /// `InvalidArg` for a blank name, `NotFound` when the answering source
    /// knows no such company, otherwise `AllProvidersFailed` or
    /// `AllProvidersTimedOut` when no connector could answer.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "finboard::search", skip(self))
    )]
    pub async fn search(&self, company_name: &str) -> Result<DashboardReport, FinboardError> {
        let query = validate_company_name(company_name)?;
        let request = &self.cfg.report;

        let mut attempted_any = false;
        let mut errors: Vec<FinboardError> = Vec::new();

        for c in &self.connectors {
            let attempt = if c.resolves_codes() {
                self.search_via_code_table(c.as_ref(), query, request).await
            } else if c.as_financial_data_provider().is_some() {
                self.search_via_financial_data(c.as_ref(), query, request)
                    .await
            } else {
                continue;
            };
            attempted_any = true;

            let attempt = match attempt {
                Err(e @ FinboardError::NotFound { .. }) if !errors.is_empty() => {
                    if c.as_fallback_provider().is_some() {
                        self.search_via_fallback(c.as_ref(), query, request).await
                    } else {
                        Err(e)
                    }
                }
                other => other,
            };

            match attempt {
                Ok(mut report) => {
                    if !errors.is_empty() {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(source = c.name(), skipped = errors.len(), "answered by fallback source");
                        report.degraded = true;
                        errors.append(&mut report.warnings);
                        report.warnings = errors;
                    }
                    return Ok(report);
                }
                Err(e) if !e.is_recoverable() => return Err(e),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(connector = c.name(), error = %e, "source failed, trying next");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        let errors = errors.into_iter().flat_map(FinboardError::flatten).collect();
        Err(no_source_answered(
            Capability::Search,
            attempted_any,
            errors,
            None,
        ))
    }

    async fn search_via_code_table(
        &self,
        connector: &dyn FinboardConnector,
        query: &str,
        request: &ReportRequest,
    ) -> Result<DashboardReport, FinboardError> {
        let name = connector.name();
        let provider = connector
            .as_code_table_provider()
            .ok_or_else(|| FinboardError::unsupported(Capability::CodeTable.as_str()))?;
        let table = Self::provider_call_with_timeout(
            name,
            Capability::CodeTable.as_str(),
            self.cfg.provider_timeout,
            provider.code_table(),
        )
        .await?;

        let resolution = resolve(query, &table).map_err(|e| match e {
            FinboardError::Malformed { msg, .. } => FinboardError::malformed(name, msg),
            other => other,
        })?;
        let Resolution::Found { record, .. } = resolution else {
            return Err(FinboardError::not_found(format!(
                "company matching '{query}'"
            )));
        };

        let report = self
            .fetch_indicators_via(connector, &record.code, request)
            .await;
        if report.failed_categories.len() == Category::ALL.len() {
            return Err(FinboardError::AllProvidersFailed(report.warnings));
        }

        Ok(DashboardReport {
            query: query.to_string(),
            company: Some(record),
            source: name.to_string(),
            request: request.clone(),
            indicators: report.indicators,
            degraded: false,
            warnings: report.warnings,
        })
    }

    async fn search_via_financial_data(
        &self,
        connector: &dyn FinboardConnector,
        query: &str,
        request: &ReportRequest,
    ) -> Result<DashboardReport, FinboardError> {
        let name = connector.name();
        let provider = connector
            .as_financial_data_provider()
            .ok_or_else(|| FinboardError::unsupported(Capability::FinancialData.as_str()))?;
        let mut indicators = Self::provider_call_with_timeout(
            name,
            Capability::FinancialData.as_str(),
            self.cfg.provider_timeout,
            provider.financial_data(query, request),
        )
        .await?;
        // Stable: upstream order is kept within a category.
        indicators.sort_by_key(|r| r.category);

        Ok(DashboardReport {
            query: query.to_string(),
            company: None,
            source: name.to_string(),
            request: request.clone(),
            indicators,
            degraded: false,
            warnings: Vec::new(),
        })
    }

    async fn search_via_fallback(
        &self,
        connector: &dyn FinboardConnector,
        query: &str,
        request: &ReportRequest,
    ) -> Result<DashboardReport, FinboardError> {
        let name = connector.name();
        let provider = connector
            .as_fallback_provider()
            .ok_or_else(|| FinboardError::unsupported(Capability::Fallback.as_str()))?;
        #[cfg(feature = "tracing")]
        tracing::warn!(source = name, company = query, "company unknown offline, serving canned indicators");
        let mut indicators = Self::provider_call_with_timeout(
            name,
            Capability::Fallback.as_str(),
            self.cfg.provider_timeout,
            provider.fallback_indicators(request),
        )
        .await?;
        indicators.sort_by_key(|r| r.category);

        Ok(DashboardReport {
            query: query.to_string(),
            company: None,
            source: name.to_string(),
            request: request.clone(),
            indicators,
            degraded: false,
            warnings: Vec::new(),
        })
    }
}
