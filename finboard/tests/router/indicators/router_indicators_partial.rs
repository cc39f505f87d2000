use std::time::Duration;

use finboard::{Category, CompanyCode, Finboard, FinboardError, ReportRequest};
use finboard_mock::MockBehavior;

use crate::helpers::{SAMSUNG_TABLE, disclosure, rec};

#[tokio::test]
async fn failed_category_contributes_nothing() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_indicator_behavior(
        Category::Stability,
        MockBehavior::Fail(FinboardError::connector("dart", "status 503")),
    )
    .await;
    let finboard = Finboard::builder().with_connector(dart).build().unwrap();

    let report = finboard
        .fetch_indicators(&CompanyCode::new("00126380"), &ReportRequest::default())
        .await;
    assert_eq!(report.failed_categories, vec![Category::Stability]);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.indicators.len(), 3);
    assert!(report.indicators.iter().all(|r| r.category != Category::Stability));
}

#[tokio::test(start_paused = true)]
async fn hanging_category_times_out_alone() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_indicator_behavior(Category::Growth, MockBehavior::Hang)
        .await;
    let finboard = Finboard::builder()
        .with_connector(dart)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let report = finboard.search("삼성전자").await.unwrap();
    assert_eq!(report.indicators.len(), 3);
    match &report.warnings[..] {
        [FinboardError::ProviderTimeout { connector, capability }] => {
            assert_eq!(connector, "dart");
            assert_eq!(capability, "indicators");
        }
        other => panic!("unexpected warnings: {other:?}"),
    }
    assert!(!report.degraded);
}

#[tokio::test]
async fn not_found_category_is_empty_not_failed() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_indicator_behavior(
        Category::Activity,
        MockBehavior::Fail(FinboardError::not_found("activity indicators")),
    )
    .await;
    let finboard = Finboard::builder().with_connector(dart).build().unwrap();

    let report = finboard
        .fetch_indicators(&CompanyCode::new("00126380"), &ReportRequest::default())
        .await;
    assert!(report.failed_categories.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(report.indicators.len(), 3);
}

#[tokio::test]
async fn records_are_stamped_with_their_category() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    // Mislabelled upstream row.
    ctl.set_indicator_behavior(
        Category::Growth,
        MockBehavior::Return(vec![rec(Category::Activity, "매출성장률", 3.0)]),
    )
    .await;
    let finboard = Finboard::builder().with_connector(dart).build().unwrap();

    let report = finboard
        .fetch_indicators(&CompanyCode::new("00126380"), &ReportRequest::default())
        .await;
    let growth: Vec<_> = report
        .indicators
        .iter()
        .filter(|r| r.name == "매출성장률")
        .collect();
    assert_eq!(growth.len(), 1);
    assert_eq!(growth[0].category, Category::Growth);
}

#[tokio::test]
async fn without_indicator_source_every_category_fails() {
    let (be, _ctl) = crate::helpers::backend("backend", vec![]).await;
    let finboard = Finboard::builder().with_connector(be).build().unwrap();

    let report = finboard
        .fetch_indicators(&CompanyCode::new("00126380"), &ReportRequest::default())
        .await;
    assert_eq!(report.failed_categories, Category::ALL.to_vec());
    assert!(report.indicators.is_empty());
    assert_eq!(report.warnings, vec![FinboardError::unsupported("indicators")]);
}
