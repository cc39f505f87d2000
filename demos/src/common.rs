use std::sync::Arc;

use finboard::{Finboard, FinboardError};
use finboard_backend::BackendConnector;
use finboard_core::FinboardConnector;
use finboard_dart::DartConnector;
use finboard_mock::FixtureConnector;

/// Return the connectors for demos, in fallback order.
///
/// With `FINBOARD_DEMOS_USE_MOCK` set only the offline fixture is used.
/// Otherwise OpenDART (when `DART_API_KEY` is set) and the backend
/// (`FINBOARD_BACKEND_URL`) come first and the fixture catches their failures.
#[must_use]
pub fn get_connectors() -> Vec<Arc<dyn FinboardConnector>> {
    if std::env::var("FINBOARD_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using offline fixture connector) ---");
        return vec![Arc::new(FixtureConnector::new())];
    }

    let mut out: Vec<Arc<dyn FinboardConnector>> = Vec::new();
    match DartConnector::from_env() {
        Ok(dart) => out.push(Arc::new(dart)),
        Err(e) => eprintln!("skipping OpenDART: {e}"),
    }
    match BackendConnector::from_env() {
        Ok(backend) => out.push(Arc::new(backend)),
        Err(e) => eprintln!("skipping backend: {e}"),
    }
    out.push(Arc::new(FixtureConnector::new()));
    out
}

/// Build an orchestrator over [`get_connectors`].
///
/// # Errors
/// Propagates builder validation errors.
pub fn build_finboard() -> Result<Finboard, FinboardError> {
    get_connectors()
        .into_iter()
        .fold(Finboard::builder(), |b, c| b.with_connector(c))
        .build()
}
