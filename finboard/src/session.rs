//! Overlapping searches from one interactive caller.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use finboard_core::{DashboardReport, FinboardError};

use crate::Finboard;

/// Result of a search run through a [`SearchSession`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// No newer search started while this one ran.
    Current(DashboardReport),
    /// A newer search started meanwhile; the caller should drop this result.
    Superseded {
        /// Generation of the finished search.
        generation: u64,
        /// Latest generation at completion time.
        latest: u64,
    },
}

impl SearchOutcome {
    /// The report, when still current.
    #[must_use]
    pub fn into_current(self) -> Option<DashboardReport> {
        match self {
            Self::Current(report) => Some(report),
            Self::Superseded { .. } => None,
        }
    }

    /// Whether a newer search replaced this one.
    #[must_use]
    pub const fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded { .. })
    }
}

/// Tags searches with a request generation so that only the latest one is shown.
///
/// In-flight searches are not cancelled; a search that completes after a newer
/// one started comes back as [`SearchOutcome::Superseded`], whether it
/// succeeded or failed.
pub struct SearchSession {
    finboard: Arc<Finboard>,
    generation: AtomicU64,
}

impl SearchSession {
    /// Start a session over a shared orchestrator.
    #[must_use]
    pub const fn new(finboard: Arc<Finboard>) -> Self {
        Self {
            finboard,
            generation: AtomicU64::new(0),
        }
    }

    /// Generation of the most recently started search (0 before the first).
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// The orchestrator searches run on.
    #[must_use]
    pub fn finboard(&self) -> &Finboard {
        &self.finboard
    }

    /// Run [`Finboard::search`] under a fresh generation.
    ///
    /// # Errors
    /// The search error, only when this search is still the latest one.
    pub async fn search(&self, company_name: &str) -> Result<SearchOutcome, FinboardError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.finboard.search(company_name).await;

        let latest = self.latest_generation();
        if latest != generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(generation, latest, ok = result.is_ok(), "dropping stale search result");
            return Ok(SearchOutcome::Superseded { generation, latest });
        }
        result.map(SearchOutcome::Current)
    }
}
