use std::sync::Arc;
use std::time::Duration;

use finboard::{Finboard, FinboardError, FiscalYear, ReportPeriod};
use finboard_mock::FixtureConnector;

#[test]
fn build_requires_a_connector() {
    let err = Finboard::builder().build().err().expect("must fail");
    assert!(matches!(err, FinboardError::InvalidArg(_)));
}

#[test]
fn build_rejects_zero_search_limit() {
    let err = Finboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .company_search_limit(0)
        .build()
        .err()
        .expect("must fail");
    assert!(matches!(err, FinboardError::InvalidArg(_)));
}

#[test]
fn builder_modifiers_land_in_config() {
    let finboard = Finboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .year(FiscalYear::new("2022").unwrap())
        .report_period(ReportPeriod::Annual)
        .provider_timeout(Duration::from_secs(3))
        .request_timeout(Duration::from_secs(8))
        .company_search_limit(5)
        .build()
        .unwrap();

    let cfg = finboard.config();
    assert_eq!(cfg.report.year.as_str(), "2022");
    assert_eq!(cfg.report.period.code(), "11011");
    assert_eq!(cfg.provider_timeout, Duration::from_secs(3));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(8)));
    assert_eq!(cfg.company_search_limit, 5);
    assert_eq!(finboard.connector_names(), vec!["finboard-fixture"]);
}

#[tokio::test]
async fn requested_report_is_echoed() {
    let finboard = Finboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .report_period(ReportPeriod::HalfYear)
        .build()
        .unwrap();

    let report = finboard.search("NAVER").await.unwrap();
    assert_eq!(report.request.period, ReportPeriod::HalfYear);
    assert_eq!(report.request.year.as_str(), "2023");
}
