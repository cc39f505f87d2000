use finboard::{Capability, Category, Finboard, FinboardError};
use finboard_mock::MockBehavior;

use crate::helpers::{backend, rec};

#[tokio::test]
async fn backend_records_are_grouped_by_category() {
    let (be, ctl) = backend(
        "backend",
        vec![
            rec(Category::Activity, "총자산회전율", 0.8),
            rec(Category::Profitability, "ROE", 12.0),
            rec(Category::Stability, "부채비율", 80.0),
            rec(Category::Profitability, "ROA", 6.0),
        ],
    )
    .await;
    let finboard = Finboard::builder().with_connector(be).build().unwrap();

    let report = finboard.search("삼성전자").await.unwrap();
    assert_eq!(report.company, None);
    assert_eq!(report.source, "backend");
    let names: Vec<&str> = report.indicators.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["ROE", "ROA", "부채비율", "총자산회전율"]);
    assert_eq!(ctl.call_count(Capability::FinancialData).await, 1);
}

#[tokio::test]
async fn backend_not_found_is_user_facing() {
    let (be, ctl) = backend("backend", vec![]).await;
    ctl.set_financial_data_behavior(MockBehavior::Fail(FinboardError::not_found(
        "financial data for ACME",
    )))
    .await;
    let finboard = Finboard::builder().with_connector(be).build().unwrap();

    let err = finboard.search("ACME").await.unwrap_err();
    assert!(err.is_user_facing());
}

#[tokio::test]
async fn empty_backend_answer_is_kept() {
    let (be, _ctl) = backend("backend", vec![]).await;
    let finboard = Finboard::builder().with_connector(be).build().unwrap();

    let report = finboard.search("ACME").await.unwrap();
    assert!(report.indicators.is_empty());
    assert!(!report.degraded);
}
