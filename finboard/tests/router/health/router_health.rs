use std::sync::Arc;
use std::time::Duration;

use finboard::{Finboard, FinboardError};
use finboard_mock::{DynamicMockConnector, FixtureConnector, MockBehavior, MockProfile};

#[tokio::test(start_paused = true)]
async fn probes_every_connector_in_registration_order() {
    let (up, up_ctl) = DynamicMockConnector::new_with_controller("up", MockProfile::Backend);
    up_ctl.set_health_behavior(MockBehavior::Return(true)).await;
    let (degraded, degraded_ctl) =
        DynamicMockConnector::new_with_controller("degraded", MockProfile::Backend);
    degraded_ctl.set_health_behavior(MockBehavior::Return(false)).await;
    let (stuck, stuck_ctl) = DynamicMockConnector::new_with_controller("stuck", MockProfile::Disclosure);
    stuck_ctl.set_health_behavior(MockBehavior::Hang).await;

    let finboard = Finboard::builder()
        .with_connector(up)
        .with_connector(degraded)
        .with_connector(stuck)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let report = finboard.health().await.unwrap();
    let names: Vec<&str> = report.connectors.iter().map(|c| c.connector.as_str()).collect();
    assert_eq!(names, vec!["up", "degraded", "stuck"]);
    assert!(report.connectors[0].healthy);
    assert!(!report.connectors[1].healthy);
    assert_eq!(report.connectors[1].error, None);
    assert!(matches!(
        report.connectors[2].error,
        Some(FinboardError::ProviderTimeout { .. })
    ));
    assert!(!report.all_healthy());
}

#[tokio::test]
async fn fixture_is_always_healthy() {
    let finboard = Finboard::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap();

    assert!(finboard.health().await.unwrap().all_healthy());
}
