use std::time::Duration;

use finboard::{Capability, Category, Finboard, FinboardError, Grade, ReportScoring};
use finboard_mock::MockBehavior;

use crate::helpers::{SAMSUNG_TABLE, disclosure, rec};

#[tokio::test]
async fn exact_name_wins_over_earlier_substring_matches() {
    let (dart, _ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    let finboard = Finboard::builder().with_connector(dart).build().unwrap();

    let report = finboard.search("  삼성전자 ").await.unwrap();
    let company = report.company.expect("resolved company");
    assert_eq!(company.name, "삼성전자");
    assert_eq!(company.code.as_str(), "00126380");
    assert_eq!(report.query, "삼성전자");
    assert_eq!(report.source, "dart");
    assert!(!report.degraded);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn partial_name_takes_first_substring_match() {
    let (dart, _ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    let finboard = Finboard::builder().with_connector(dart).build().unwrap();

    let report = finboard.search("삼성").await.unwrap();
    assert_eq!(report.company.unwrap().name, "삼성물산");
}

#[tokio::test]
async fn blank_name_is_rejected_before_any_request() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    let finboard = Finboard::builder().with_connector(dart).build().unwrap();

    let err = finboard.search("   ").await.unwrap_err();
    assert!(matches!(err, FinboardError::InvalidArg(_)));
    assert!(err.is_user_facing());
    assert_eq!(ctl.call_count(Capability::CodeTable).await, 0);
    assert_eq!(ctl.call_count(Capability::Indicators).await, 0);
}

#[tokio::test]
async fn unknown_company_is_not_found_and_fetches_nothing() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    let finboard = Finboard::builder().with_connector(dart).build().unwrap();

    let err = finboard.search("카카오").await.unwrap_err();
    match err {
        FinboardError::NotFound { what } => assert!(what.contains("카카오")),
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(ctl.call_count(Capability::Indicators).await, 0);
}

#[tokio::test(start_paused = true)]
async fn categories_keep_fixed_order_whatever_finishes_first() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_indicator_behavior(
        Category::Profitability,
        MockBehavior::Delayed(
            Duration::from_millis(300),
            vec![
                rec(Category::Profitability, "ROE", 15.5),
                rec(Category::Profitability, "ROA", 8.2),
            ],
        ),
    )
    .await;
    ctl.set_indicator_behavior(
        Category::Stability,
        MockBehavior::Delayed(
            Duration::from_millis(100),
            vec![rec(Category::Stability, "부채비율", 120.0)],
        ),
    )
    .await;
    let finboard = Finboard::builder().with_connector(dart).build().unwrap();

    let report = finboard.search("삼성전자").await.unwrap();
    let order: Vec<Category> = report.indicators.iter().map(|r| r.category).collect();
    assert_eq!(
        order,
        vec![
            Category::Profitability,
            Category::Profitability,
            Category::Stability,
            Category::Growth,
            Category::Activity,
        ]
    );
    assert_eq!(ctl.call_count(Capability::Indicators).await, 4);

    let card = report.scorecard();
    // mean(15.5, 8.2) * 5
    assert!((card.category(Category::Profitability) - 59.25).abs() < 1e-9);
    assert!((card.category(Category::Stability) - 60.0).abs() < 1e-9);
    // (59.25 + 60 + 52.5 + 20) / 4
    assert!((card.overall.score - 47.9375).abs() < 1e-9);
    assert_eq!(card.overall.letter, Grade::D);
}
