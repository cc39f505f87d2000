use std::time::Duration;

use finboard_core::{Capability, FinboardError};

/// Run one dashboard sub-request per source concurrently and wait for all of them.
///
/// Answers come back in the order the tasks were given, not completion order.
/// When `deadline` passes first, every answer is discarded and the call fails
/// with `RequestTimeout` labelled with `capability`.
pub async fn join_within<I, F, T>(
    capability: Capability,
    deadline: Option<Duration>,
    tasks: I,
) -> Result<Vec<T>, FinboardError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    let all = futures::future::join_all(tasks);
    crate::core::with_request_deadline(capability.as_str(), deadline, all).await
}

/// The error reported when no registered source produced an answer.
///
/// `skipped` holds the tagged failure of each source that was tried.
/// - No source offered `capability` at all: `Unsupported`.
/// - Every source ran out of time: `AllProvidersTimedOut`.
/// - Every source said the subject does not exist and `unknown_subject` names
///   it: a single `NotFound` for that subject.
/// - Anything else keeps the individual failures in `AllProvidersFailed`.
pub fn no_source_answered(
    capability: Capability,
    attempted_any: bool,
    skipped: Vec<FinboardError>,
    unknown_subject: Option<String>,
) -> FinboardError {
    if !attempted_any {
        return FinboardError::unsupported(capability.as_str());
    }
    let every = |pred: fn(&FinboardError) -> bool| !skipped.is_empty() && skipped.iter().all(pred);

    if every(|e| matches!(e, FinboardError::ProviderTimeout { .. })) {
        return FinboardError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    match unknown_subject {
        Some(subject) if every(|e| matches!(e, FinboardError::NotFound { .. })) => {
            FinboardError::not_found(subject)
        }
        _ => FinboardError::AllProvidersFailed(skipped),
    }
}
