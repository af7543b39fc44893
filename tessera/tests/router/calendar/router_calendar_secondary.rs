use tessera::{Tessera, TesseraError, Weeks};

use crate::helpers::{MockConnector, OCTOCAT, d, entry, fixed_clock, m_contrib};

#[tokio::test]
async fn failed_events_fetch_degrades_to_primary_only() {
    let c = MockConnector::builder()
        .name("c")
        .contributions(vec![entry("2024-06-10", 4, 2)])
        .events_fn(|_| Err(TesseraError::connector("c", "Failed to fetch data: 503")))
        .build();
    let tessera = Tessera::builder()
        .with_connector(c)
        .clock(fixed_clock())
        .build()
        .unwrap();

    let report = tessera.calendar(OCTOCAT, Weeks::new(1).unwrap()).await.unwrap();
    let tenth = report.calendar.get(d(2024, 6, 10)).unwrap();
    assert_eq!((tenth.count, tenth.level.get()), (4, 2));
    assert_eq!(report.calendar.total, 4);
    assert!(report.is_degraded());
    assert_eq!(report.warnings.len(), 1);
}

#[tokio::test]
async fn missing_events_capability_is_not_a_warning() {
    let c = m_contrib("c", vec![entry("2024-06-10", 4, 2)]);
    let tessera = Tessera::builder()
        .with_connector(c)
        .clock(fixed_clock())
        .build()
        .unwrap();

    let report = tessera.calendar(OCTOCAT, Weeks::new(1).unwrap()).await.unwrap();
    assert!(!report.is_degraded());
    assert_eq!(report.calendar.total, 4);
}

#[tokio::test]
async fn events_may_come_from_a_different_connector() {
    let primary = m_contrib("primary", vec![]);
    let secondary = MockConnector::builder()
        .name("secondary")
        .events(crate::helpers::events_on("2024-06-12", 3))
        .build();
    let tessera = Tessera::builder()
        .with_connector(primary)
        .with_connector(secondary)
        .clock(fixed_clock())
        .build()
        .unwrap();

    let report = tessera.calendar(OCTOCAT, Weeks::new(1).unwrap()).await.unwrap();
    let today = report.calendar.get(d(2024, 6, 12)).unwrap();
    assert_eq!((today.count, today.level.get()), (3, 2));
}

#[tokio::test]
async fn primary_failure_fails_the_calendar_even_if_events_succeed() {
    let c = MockConnector::builder()
        .name("c")
        .contributions_fn(|u| Err(TesseraError::not_found(format!("user {u}"))))
        .events(crate::helpers::events_on("2024-06-12", 3))
        .build();
    let tessera = Tessera::builder()
        .with_connector(c)
        .clock(fixed_clock())
        .build()
        .unwrap();

    match tessera.calendar(OCTOCAT, Weeks::DEFAULT).await.unwrap_err() {
        TesseraError::NotFound { what } => assert_eq!(what, "contributions for octocat"),
        other => panic!("unexpected: {other:?}"),
    }
}
