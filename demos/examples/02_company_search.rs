use finboard_demos::common::build_finboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "전자".to_string());
    let finboard = build_finboard()?;

    println!("Searching companies for '{query}'...");
    let report = finboard.search_companies(&query).await?;

    println!("\n## {} match(es) from {}", report.companies.len(), report.source);
    for (i, name) in report.companies.iter().enumerate() {
        println!("{:>3}. {name}", i + 1);
    }
    for w in &report.warnings {
        println!("  warning: {w}");
    }

    Ok(())
}
