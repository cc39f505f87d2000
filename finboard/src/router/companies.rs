use finboard_core::{Capability, CompanySearchReport, FinboardError, validate_company_name};

use crate::Finboard;
use crate::core::tag_err;
use crate::router::util::no_source_answered;

impl Finboard {
    /// List candidate company names for a free-text query.
    ///
    /// Behavior and trade-offs:
    /// - Priority with fallback: the first connector that answers wins, even
    ///   with an empty list. Failures before it are kept as warnings.
    /// - At most `company_search_limit` names are returned, in source order.
    ///
    /// # Errors
    /// `InvalidArg` for a blank query; `NotFound` when every source reported
    /// not found; otherwise the collapsed provider failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "finboard::search_companies", skip(self))
    )]
    pub async fn search_companies(&self, query: &str) -> Result<CompanySearchReport, FinboardError> {
        let q = validate_company_name(query)?;
        let limit = self.cfg.company_search_limit;

        let mut attempted_any = false;
        let mut errors: Vec<FinboardError> = Vec::new();

        for c in &self.connectors {
            let Some(provider) = c.as_company_search_provider() else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                Capability::CompanySearch.as_str(),
                self.cfg.provider_timeout,
                provider.search_companies(q, limit),
            )
            .await
            {
                Ok(mut companies) => {
                    companies.truncate(limit);
                    return Ok(CompanySearchReport {
                        query: q.to_string(),
                        companies,
                        source: c.name().to_string(),
                        warnings: errors,
                    });
                }
                Err(e @ FinboardError::InvalidArg(_)) => return Err(e),
                Err(e) => errors.push(tag_err(c.name(), e)),
            }
        }

        Err(no_source_answered(
            Capability::CompanySearch,
            attempted_any,
            errors,
            Some(format!("companies matching '{q}'")),
        ))
    }
}
