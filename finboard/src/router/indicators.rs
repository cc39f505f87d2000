use finboard_core::{
    Capability, Category, CompanyCode, FinboardConnector, FinboardError, IndicatorReport,
    ReportRequest,
};

use crate::Finboard;
use crate::core::{tag_err, with_request_deadline};

impl Finboard {
    /// Fetch the indicators of all four categories for a company code.
    ///
    /// Behavior and trade-offs:
    /// - Uses the first registered connector that serves per-category indicators.
    /// - Issues one request per category, concurrently; records are concatenated
    ///   in [`Category::ALL`] order regardless of completion order.
    /// - Never fails as a whole: a category whose request fails or times out
    ///   contributes no records and is listed in `failed_categories` with its
    ///   error in `warnings`. A category reported as not found is simply empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "finboard::fetch_indicators",
            skip(self, code, request),
            fields(code = %code, year = %request.year, period = %request.period),
        )
    )]
    pub async fn fetch_indicators(
        &self,
        code: &CompanyCode,
        request: &ReportRequest,
    ) -> IndicatorReport {
        match self
            .connectors
            .iter()
            .find(|c| c.as_indicator_provider().is_some())
        {
            Some(c) => self.fetch_indicators_via(c.as_ref(), code, request).await,
            None => IndicatorReport {
                code: code.clone(),
                request: request.clone(),
                indicators: Vec::new(),
                failed_categories: Category::ALL.to_vec(),
                warnings: vec![FinboardError::unsupported(Capability::Indicators.as_str())],
            },
        }
    }

    pub(crate) async fn fetch_indicators_via(
        &self,
        connector: &dyn FinboardConnector,
        code: &CompanyCode,
        request: &ReportRequest,
    ) -> IndicatorReport {
        let name = connector.name();
        let capability = Capability::Indicators.as_str();
        let timeout = self.cfg.provider_timeout;
        let deadline = self.cfg.request_timeout;

        let tasks = Category::ALL.map(|category| async move {
            let Some(provider) = connector.as_indicator_provider() else {
                return (category, Err(FinboardError::unsupported(capability)));
            };
            let call = Self::provider_call_with_timeout(
                name,
                capability,
                timeout,
                provider.indicators(code, category, request),
            );
            let res = with_request_deadline(capability, deadline, call)
                .await
                .and_then(|answer| answer);
            (category, res)
        });

        let mut report = IndicatorReport {
            code: code.clone(),
            request: request.clone(),
            indicators: Vec::new(),
            failed_categories: Vec::new(),
            warnings: Vec::new(),
        };
        for (category, res) in futures::future::join_all(tasks).await {
            match res {
                Ok(records) => {
                    report.indicators.extend(records.into_iter().map(|mut r| {
                        r.category = category;
                        r
                    }));
                }
                // No data for the category is an answer, not a failure.
                Err(FinboardError::NotFound { .. }) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = name, category = %category, "no indicators for category");
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(connector = name, category = %category, error = %e, "category fetch failed");
                    report.failed_categories.push(category);
                    report.warnings.push(tag_err(name, e));
                }
            }
        }
        report
    }
}
