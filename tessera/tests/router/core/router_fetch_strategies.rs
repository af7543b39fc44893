use std::time::Duration;

use tessera::{FetchStrategy, Tessera, TesseraError};

use crate::helpers::{MockConnector, OCTOCAT, entry};

#[tokio::test(start_paused = true)]
async fn latency_returns_the_fastest_success() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_millis(200))
        .contributions(vec![entry("2024-06-10", 1, 1)])
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .delay(Duration::from_millis(10))
        .contributions(vec![entry("2024-06-10", 7, 3)])
        .build();

    let tessera = Tessera::builder()
        .with_connector(slow.clone())
        .with_connector(fast.clone())
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    let out = tessera.contributions(OCTOCAT).await.unwrap();
    assert_eq!(out[0].count, 7);
    assert_eq!(slow.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn latency_skips_fast_failures() {
    let fast_broken = MockConnector::builder()
        .name("fast_broken")
        .delay(Duration::from_millis(5))
        .contributions_fn(|_| Err(TesseraError::Other("nope".into())))
        .build();
    let slow_ok = MockConnector::builder()
        .name("slow_ok")
        .delay(Duration::from_millis(50))
        .contributions(vec![entry("2024-06-10", 4, 2)])
        .build();

    let tessera = Tessera::builder()
        .with_connector(fast_broken)
        .with_connector(slow_ok)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    assert_eq!(tessera.contributions(OCTOCAT).await.unwrap()[0].count, 4);
}

#[tokio::test(start_paused = true)]
async fn priority_mode_waits_for_the_preferred_provider() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_millis(200))
        .contributions(vec![entry("2024-06-10", 1, 1)])
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .delay(Duration::from_millis(10))
        .contributions(vec![entry("2024-06-10", 7, 3)])
        .build();

    let tessera = Tessera::builder()
        .with_connector(slow)
        .with_connector(fast.clone())
        .build()
        .unwrap();

    assert_eq!(tessera.contributions(OCTOCAT).await.unwrap()[0].count, 1);
    assert_eq!(fast.call_count(), 0);
}
