use std::sync::Arc;
use std::time::Duration;

use finboard::{Capability, Category, CompanyRecord, Finboard, FinboardConnector, FinboardError};
use finboard_mock::{FixtureConnector, FixtureSet, MockBehavior};

use crate::helpers::{SAMSUNG_TABLE, backend, disclosure, rec};

#[tokio::test]
async fn unreachable_source_falls_back_to_fixture() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_code_table_behavior(MockBehavior::Fail(FinboardError::connector(
        "dart",
        "connection failed: code table",
    )))
    .await;
    let finboard = Finboard::builder()
        .with_connector(dart)
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let report = finboard.search("삼성전자").await.unwrap();
    assert_eq!(report.source, FixtureConnector::KEY.as_str());
    assert!(report.degraded);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.company.unwrap().code.as_str(), "00126380");
    assert!(!report.indicators.is_empty());
}

#[tokio::test]
async fn unknown_company_gets_canned_indicators_when_backend_is_down() {
    let (be, be_ctl) = backend("backend", vec![]).await;
    be_ctl
        .set_financial_data_behavior(MockBehavior::Fail(FinboardError::connector(
            "backend",
            "connection failed",
        )))
        .await;
    let fixture = FixtureConnector::new();
    let canned = fixture.fixtures().fallback_indicators().to_vec();
    let finboard = Finboard::builder()
        .with_connector(be)
        .with_connector(Arc::new(fixture))
        .build()
        .unwrap();

    let report = finboard.search("쿠팡").await.unwrap();
    assert_eq!(report.query, "쿠팡");
    assert_eq!(report.source, FixtureConnector::KEY.as_str());
    assert!(report.degraded);
    assert!(report.company.is_none());
    assert_eq!(report.indicators, canned);
    match &report.warnings[..] {
        [FinboardError::Connector { connector, .. }] => assert_eq!(connector, "backend"),
        other => panic!("unexpected warnings: {other:?}"),
    }
}

#[tokio::test]
async fn injected_fallback_list_is_served_sorted_by_category() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_code_table_behavior(MockBehavior::Fail(FinboardError::connector("dart", "status 503")))
        .await;
    let set = FixtureSet::empty()
        .with_company(CompanyRecord::new("테스트기업", "00000001"), vec![])
        .with_fallback_indicators(vec![
            rec(Category::Activity, "총자산회전율", 0.9),
            rec(Category::Profitability, "ROE", 7.0),
        ]);
    let finboard = Finboard::builder()
        .with_connector(dart)
        .with_connector(Arc::new(FixtureConnector::with_fixtures(set)))
        .build()
        .unwrap();

    let report = finboard.search("삼성전자").await.unwrap();
    assert!(report.degraded);
    assert!(report.company.is_none());
    let categories: Vec<_> = report.indicators.iter().map(|r| r.category).collect();
    assert_eq!(categories, vec![Category::Profitability, Category::Activity]);
}

#[tokio::test]
async fn fixture_alone_still_reports_unknown_company() {
    let finboard = Finboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let err = finboard.search("쿠팡").await.unwrap_err();
    assert!(matches!(err, FinboardError::NotFound { .. }));
}

#[tokio::test]
async fn malformed_code_table_falls_back() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_code_table_behavior(MockBehavior::Return(b"<html>maintenance</html>".to_vec()))
        .await;
    let (be, _be_ctl) = backend("backend", vec![rec(Category::Growth, "매출성장률", 4.0)]).await;
    let finboard = Finboard::builder()
        .with_connector(dart)
        .with_connector(be)
        .build()
        .unwrap();

    let report = finboard.search("삼성전자").await.unwrap();
    assert_eq!(report.source, "backend");
    assert!(report.degraded);
    match &report.warnings[..] {
        [FinboardError::Malformed { connector, .. }] => assert_eq!(connector, "dart"),
        other => panic!("unexpected warnings: {other:?}"),
    }
}

#[tokio::test]
async fn not_found_is_terminal() {
    let (dart, _ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    let (be, be_ctl) = backend("backend", vec![rec(Category::Growth, "매출성장률", 4.0)]).await;
    let finboard = Finboard::builder()
        .with_connector(dart)
        .with_connector(be)
        .build()
        .unwrap();

    let err = finboard.search("NAVER").await.unwrap_err();
    assert!(matches!(err, FinboardError::NotFound { .. }));
    assert_eq!(be_ctl.call_count(Capability::FinancialData).await, 0);
}

#[tokio::test]
async fn source_with_every_category_failing_counts_as_unavailable() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    for category in Category::ALL {
        ctl.set_indicator_behavior(
            category,
            MockBehavior::Fail(FinboardError::connector("dart", "status 503")),
        )
        .await;
    }
    let (be, _be_ctl) = backend("backend", vec![rec(Category::Activity, "총자산회전율", 0.8)]).await;
    let finboard = Finboard::builder()
        .with_connector(dart)
        .with_connector(be)
        .build()
        .unwrap();

    let report = finboard.search("삼성전자").await.unwrap();
    assert_eq!(report.source, "backend");
    assert!(report.degraded);
}

#[tokio::test]
async fn every_source_failing_aggregates_errors() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_code_table_behavior(MockBehavior::Fail(FinboardError::connector("dart", "status 500")))
        .await;
    let (be, be_ctl) = backend("backend", vec![]).await;
    be_ctl
        .set_financial_data_behavior(MockBehavior::Fail(FinboardError::malformed(
            "backend",
            "financial data: expected a sequence",
        )))
        .await;
    let finboard = Finboard::builder()
        .with_connector(dart)
        .with_connector(be)
        .build()
        .unwrap();

    match finboard.search("삼성전자").await.unwrap_err() {
        FinboardError::AllProvidersFailed(errors) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn every_source_timing_out_reports_all_timed_out() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_code_table_behavior(MockBehavior::Hang).await;
    let (be, be_ctl) = backend("backend", vec![]).await;
    be_ctl.set_financial_data_behavior(MockBehavior::Hang).await;
    let finboard = Finboard::builder()
        .with_connector(dart)
        .with_connector(be)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = finboard.search("삼성전자").await.unwrap_err();
    assert_eq!(
        err,
        FinboardError::AllProvidersTimedOut {
            capability: Capability::Search.to_string(),
        }
    );
}

#[tokio::test]
async fn no_capable_connector_is_unsupported() {
    struct Bare;
    impl FinboardConnector for Bare {
        fn name(&self) -> &'static str {
            "bare"
        }
    }

    let finboard = Finboard::builder()
        .with_connector(Arc::new(Bare))
        .build()
        .unwrap();

    let err = finboard.search("삼성전자").await.unwrap_err();
    assert_eq!(err, FinboardError::unsupported("search"));
}
