use std::time::Duration;

use finboard::{Capability, FinboardError, join_within, no_source_answered};

#[tokio::test(start_paused = true)]
async fn join_within_reports_the_capability_on_expiry() {
    let tasks = vec![async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        1
    }];
    let res = join_within(Capability::Health, Some(Duration::from_millis(1)), tasks).await;
    assert_eq!(res, Err(FinboardError::request_timeout("health")));
}

#[tokio::test]
async fn join_within_keeps_input_order() {
    let tasks = (0..4u64).map(|i| async move {
        tokio::time::sleep(Duration::from_millis(4 - i)).await;
        i
    });
    let res = join_within(Capability::Health, None, tasks).await.unwrap();
    assert_eq!(res, vec![0, 1, 2, 3]);
}

#[test]
fn mixed_failures_are_kept_individually() {
    let skipped = vec![
        FinboardError::provider_timeout("finboard-dart", "indicators"),
        FinboardError::connector("finboard-backend", "status 500"),
    ];
    let e = no_source_answered(Capability::Search, true, skipped.clone(), None);
    assert_eq!(e, FinboardError::AllProvidersFailed(skipped));
}
