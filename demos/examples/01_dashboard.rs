use finboard::{Category, KeyMetrics, ReportScoring, annotate, metric_status};
use finboard_demos::common::build_finboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "삼성전자".to_string());
    let finboard = build_finboard()?;

    println!("Looking up '{name}'...");
    let report = finboard.search(&name).await?;

    let company = report
        .company
        .as_ref()
        .map_or_else(|| report.query.clone(), |c| format!("{} ({})", c.name, c.code));
    println!(
        "\n## {company} | {} {} via {}{}",
        report.request.year,
        report.request.period,
        report.source,
        if report.degraded { " (degraded)" } else { "" }
    );
    for w in &report.warnings {
        println!("  warning: {w}");
    }

    let card = report.scorecard();
    println!("\n{:<14} | {:>6}", "Category", "Score");
    println!("{:-<15}|{:-<8}", "", "");
    for cs in &card.per_category {
        println!("{:<14} | {:>6.1}", cs.category.label(), cs.normalized_score);
    }
    println!(
        "\nOverall: {:.1} -> {} ({})",
        card.overall.score,
        card.overall.letter,
        card.overall.letter.label()
    );

    for category in Category::ALL {
        println!("\n### {}", category.label());
        for r in report.in_category(category) {
            let a = annotate(category, r.value);
            println!("  {:<24} {:>10.2}  {}", r.name, r.value, a.label);
        }
    }

    let m = KeyMetrics::from_indicators(&report.indicators);
    println!("\n## Key metrics");
    for (label, category, value) in [
        ("ROE", Category::Profitability, m.roe),
        ("Debt ratio", Category::Stability, m.debt_ratio),
        ("Revenue growth", Category::Growth, m.revenue_growth),
        ("Asset turnover", Category::Activity, m.asset_turnover),
    ] {
        println!(
            "  {label:<16} {value:>10.2}  {:?}",
            metric_status(category, value)
        );
    }

    Ok(())
}
