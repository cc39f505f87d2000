use finboard_demos::common::build_finboard;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,finboard=trace,finboard_dart=debug,finboard_backend=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let finboard = build_finboard()?;

    let _ = finboard.health().await?;
    let _ = finboard.search_companies("삼성").await?;
    let report = finboard.search("삼성전자").await?;
    tracing::info!(
        source = %report.source,
        degraded = report.degraded,
        indicators = report.indicators.len(),
        "search finished"
    );

    Ok(())
}
