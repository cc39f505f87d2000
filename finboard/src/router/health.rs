use finboard_core::{Capability, ConnectorHealth, FinboardError, HealthReport};

use crate::Finboard;
use crate::core::tag_err;
use crate::router::util::join_within;

impl Finboard {
    /// Probe every connector that exposes a liveness check, concurrently.
    ///
    /// A probe that errors or times out is reported as unhealthy with its
    /// error; it does not fail the call.
    ///
    /// # Errors
    /// `Unsupported` when no connector can report liveness and
    /// `RequestTimeout` when the overall deadline expires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "finboard::health", skip(self))
    )]
    pub async fn health(&self) -> Result<HealthReport, FinboardError> {
        let capability = Capability::Health.as_str();
        let timeout = self.cfg.provider_timeout;

        let tasks: Vec<_> = self
            .connectors
            .iter()
            .filter_map(|c| c.as_health_provider().map(|p| (c.name(), p)))
            .map(|(name, p)| async move {
                let res =
                    Self::provider_call_with_timeout(name, capability, timeout, p.health()).await;
                match res {
                    Ok(healthy) => ConnectorHealth {
                        connector: name.to_string(),
                        healthy,
                        error: None,
                    },
                    Err(e) => ConnectorHealth {
                        connector: name.to_string(),
                        healthy: false,
                        error: Some(tag_err(name, e)),
                    },
                }
            })
            .collect();

        if tasks.is_empty() {
            return Err(FinboardError::unsupported(capability));
        }

        let connectors = join_within(Capability::Health, self.cfg.request_timeout, tasks).await?;
        Ok(HealthReport { connectors })
    }
}
