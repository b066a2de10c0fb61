use chrono::Duration;
use std::sync::Arc;

use crate::clock::ManualClock;
use crate::services::access::{OtpAccessBroker, OtpBrokerConfig, OtpSweeper, OtpSweeperConfig};

fn setup(config: OtpSweeperConfig) -> (Arc<OtpAccessBroker>, Arc<ManualClock>, Arc<OtpSweeper>) {
    let clock = Arc::new(ManualClock::starting_now());
    let broker = Arc::new(OtpAccessBroker::new(OtpBrokerConfig::default(), clock.clone()));
    let sweeper = Arc::new(OtpSweeper::new(broker.clone(), config));
    (broker, clock, sweeper)
}

#[tokio::test]
async fn test_run_sweep_removes_expired() {
    let (broker, clock, sweeper) = setup(OtpSweeperConfig::default());
    broker.issue("a").await.unwrap();
    broker.issue("b").await.unwrap();

    assert_eq!(sweeper.run_sweep().await, 0);

    clock.advance(Duration::minutes(6));
    assert_eq!(sweeper.run_sweep().await, 2);
    assert!(broker.is_empty().await);
}

#[tokio::test]
async fn test_disabled_sweeper_does_not_start() {
    let (_broker, _clock, sweeper) = setup(OtpSweeperConfig {
        enabled: false,
        ..OtpSweeperConfig::default()
    });

    assert!(sweeper.start_background_task().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_background_task_sweeps_periodically() {
    let (broker, clock, sweeper) = setup(OtpSweeperConfig {
        interval_seconds: 60,
        enabled: true,
    });
    broker.issue("a").await.unwrap();
    clock.advance(Duration::minutes(6));

    let handle = sweeper.start_background_task().unwrap();

    // First tick fires immediately.
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert!(broker.is_empty().await);

    broker.issue("b").await.unwrap();
    clock.advance(Duration::minutes(6));
    assert_eq!(broker.len().await, 1);

    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    assert!(broker.is_empty().await);

    handle.abort();
}
