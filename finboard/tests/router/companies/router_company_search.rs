use std::sync::Arc;
use std::time::Duration;

use finboard::{Finboard, FinboardError};
use finboard_mock::{DynamicMockConnector, FixtureConnector, MockBehavior, MockProfile};

#[tokio::test]
async fn first_answering_source_wins() {
    let (be, ctl) = DynamicMockConnector::new_with_controller("backend", MockProfile::Backend);
    ctl.set_company_search_behavior(MockBehavior::Return(vec![
        "삼성전자".to_string(),
        "삼성전자우".to_string(),
    ]))
    .await;
    let finboard = Finboard::builder()
        .with_connector(be)
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let out = finboard.search_companies("삼성").await.unwrap();
    assert_eq!(out.source, "backend");
    assert_eq!(out.companies, vec!["삼성전자", "삼성전자우"]);
    assert!(out.warnings.is_empty());
}

#[tokio::test(start_paused = true)]
async fn failing_sources_fall_back_with_warnings() {
    let (down, down_ctl) = DynamicMockConnector::new_with_controller("down", MockProfile::Backend);
    down_ctl
        .set_company_search_behavior(MockBehavior::Fail(FinboardError::connector(
            "down",
            "status 502",
        )))
        .await;
    let (slow, slow_ctl) = DynamicMockConnector::new_with_controller("slow", MockProfile::Backend);
    slow_ctl.set_company_search_behavior(MockBehavior::Hang).await;
    let finboard = Finboard::builder()
        .with_connector(down)
        .with_connector(slow)
        .with_connector(Arc::new(FixtureConnector::new()))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let out = finboard.search_companies("LG").await.unwrap();
    assert_eq!(out.source, FixtureConnector::KEY.as_str());
    assert_eq!(out.companies, vec!["LG전자"]);
    assert_eq!(out.warnings.len(), 2);
    assert!(matches!(out.warnings[1], FinboardError::ProviderTimeout { .. }));
}

#[tokio::test]
async fn limit_caps_the_answer() {
    let (be, ctl) = DynamicMockConnector::new_with_controller("backend", MockProfile::Backend);
    ctl.set_company_search_behavior(MockBehavior::Return(
        (0..30).map(|i| format!("company {i}")).collect(),
    ))
    .await;
    let finboard = Finboard::builder()
        .with_connector(be)
        .company_search_limit(3)
        .build()
        .unwrap();

    let out = finboard.search_companies("company").await.unwrap();
    assert_eq!(out.companies, vec!["company 0", "company 1", "company 2"]);
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let (a, a_ctl) = DynamicMockConnector::new_with_controller("a", MockProfile::Backend);
    a_ctl
        .set_company_search_behavior(MockBehavior::Fail(FinboardError::not_found("x")))
        .await;
    let (b, b_ctl) = DynamicMockConnector::new_with_controller("b", MockProfile::Backend);
    b_ctl
        .set_company_search_behavior(MockBehavior::Fail(FinboardError::not_found("y")))
        .await;
    let finboard = Finboard::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = finboard.search_companies("ACME").await.unwrap_err();
    assert_eq!(err, FinboardError::not_found("companies matching 'ACME'"));
}

#[tokio::test]
async fn blank_query_is_invalid() {
    let finboard = Finboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    let err = finboard.search_companies(" ").await.unwrap_err();
    assert!(matches!(err, FinboardError::InvalidArg(_)));
}
