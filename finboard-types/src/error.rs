use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the finboard workspace.
///
/// The variants cover invalid user input, a company that cannot be resolved,
/// upstream failures (unreachable or non-success, and malformed payloads),
/// and the aggregates produced when several connectors were attempted.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FinboardError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "code-table").
        capability: String,
    },

    /// Invalid input argument, e.g. an empty company name.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A company (or other resource) could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "company matching 'ACME'".
        what: String,
    },

    /// An individual connector could not be reached or answered with a non-success status.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual connector answered with a payload of an unexpected shape.
    #[error("{connector} returned malformed data: {msg}")]
    Malformed {
        /// Connector (or decoding stage) that produced the payload.
        connector: String,
        /// Human-readable description of what did not decode.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<FinboardError>),

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "indicators", "code-table").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// All attempted providers timed out for the requested capability.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },
}

impl FinboardError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Malformed` error with the connector name and message.
    pub fn malformed(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Malformed {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true for errors whose message is meant to be shown to the user as-is.
    ///
    /// These are the input-validation and no-matching-company outcomes; they end a
    /// search instead of triggering a fallback to another data source.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::InvalidArg(_) | Self::NotFound { .. })
    }

    /// Returns true if another data source may still answer after this failure.
    ///
    /// Upstream outages, malformed payloads, timeouts and missing capabilities are
    /// recoverable. Aggregates are recoverable when every member is.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidArg(_) | Self::NotFound { .. } => false,
            Self::AllProvidersFailed(inner) => inner.iter().all(Self::is_recoverable),
            _ => true,
        }
    }

    /// Flatten nested `AllProvidersFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllProvidersFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
