use std::sync::Arc;
use std::time::Duration;

use finboard::Finboard;
use finboard_backend::{BackendConfig, BackendConnector};
use finboard_mock::FixtureConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Nothing listens on the discard port, so the backend fails fast and
    // the fixture answers instead.
    let unreachable = BackendConnector::new(
        BackendConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
    )?;

    let finboard = Finboard::builder()
        .with_connector(Arc::new(unreachable))
        .with_connector(Arc::new(FixtureConnector::new()))
        .provider_timeout(Duration::from_secs(3))
        .build()?;

    let report = finboard.search("카카오").await?;
    println!(
        "source: {} | degraded: {} | indicators: {}",
        report.source,
        report.degraded,
        report.indicators.len()
    );
    for w in &report.warnings {
        println!("  skipped: {w}");
    }

    let health = finboard.health().await?;
    for c in &health.connectors {
        println!("{:<20} healthy={}", c.connector, c.healthy);
    }

    Ok(())
}
