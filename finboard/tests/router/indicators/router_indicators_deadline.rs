use std::time::Duration;

use finboard::{Category, CompanyCode, Finboard, FinboardError, ReportRequest};
use finboard_mock::MockBehavior;

use crate::helpers::{SAMSUNG_TABLE, disclosure, one_per_category};

#[tokio::test(start_paused = true)]
async fn request_deadline_cuts_outstanding_categories() {
    let (dart, ctl) = disclosure("dart", SAMSUNG_TABLE).await;
    ctl.set_indicator_behavior(
        Category::Stability,
        MockBehavior::Delayed(Duration::from_secs(2), one_per_category(Category::Stability)),
    )
    .await;
    ctl.set_indicator_behavior(
        Category::Activity,
        MockBehavior::Delayed(Duration::from_secs(3), one_per_category(Category::Activity)),
    )
    .await;
    let finboard = Finboard::builder()
        .with_connector(dart)
        .provider_timeout(Duration::from_secs(10))
        .request_timeout(Duration::from_secs(1))
        .build()
        .unwrap();

    let report = finboard
        .fetch_indicators(&CompanyCode::new("00126380"), &ReportRequest::default())
        .await;
    assert_eq!(
        report.failed_categories,
        vec![Category::Stability, Category::Activity]
    );
    assert!(
        report
            .warnings
            .iter()
            .all(|w| matches!(w, FinboardError::RequestTimeout { capability } if capability == "indicators"))
    );
    let kept: Vec<Category> = report.indicators.iter().map(|r| r.category).collect();
    assert_eq!(kept, vec![Category::Profitability, Category::Growth]);
}
