use std::sync::Arc;

use tessera::{CalendarSession, CalendarState, Capability, Tessera, TesseraError, Weeks};
use tessera_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{OCTOCAT, entry, fixed_clock, m_contrib};

fn orchestrator(connector: Arc<dyn tessera::TesseraConnector>, weeks: u16) -> Arc<Tessera> {
    Arc::new(
        Tessera::builder()
            .with_connector(connector)
            .default_weeks(Weeks::new(weeks).unwrap())
            .clock(fixed_clock())
            .build()
            .unwrap(),
    )
}

#[tokio::test]
async fn idle_loading_ready() {
    let c = m_contrib("c", vec![entry("2024-06-10", 3, 2)]);
    let session = CalendarSession::new(orchestrator(c, 4), OCTOCAT).unwrap();

    let view = session.view();
    assert_eq!(view.generation, 0);
    assert_eq!(view.state, CalendarState::Idle);

    session.start().await;
    assert!(session.state().is_loading());
    assert_eq!(session.view().generation, 1);

    let state = session.settled().await.unwrap();
    let report = state.report().expect("ready");
    assert_eq!(report.calendar.weeks.len(), 4);
    assert_eq!(report.calendar.total, 3);
    assert_eq!(session.weeks().get(), 4);
}

#[tokio::test]
async fn failure_clears_the_grid_and_retry_recovers() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.queue_contributions_behavior(OCTOCAT, MockBehavior::Fail(TesseraError::Other("boom".into())))
        .await;
    ctl.set_contributions_behavior(OCTOCAT, MockBehavior::Return(vec![entry("2024-06-11", 1, 1)]))
        .await;

    let session = CalendarSession::new(orchestrator(conn, 2), OCTOCAT).unwrap();

    session.start().await;
    let failed = session.settled().await.unwrap();
    assert!(failed.report().is_none());
    assert!(failed.error().is_some());

    session.retry().await;
    let ready = session.settled().await.unwrap();
    assert_eq!(ready.report().unwrap().calendar.total, 1);
    assert_eq!(ctl.calls(Capability::Contributions).await.len(), 2);
}

#[tokio::test]
async fn unchanged_weeks_do_not_start_a_cycle() {
    let c = m_contrib("c", vec![]);
    let session = CalendarSession::new(orchestrator(c.clone(), 52), OCTOCAT).unwrap();

    assert!(!session.set_weeks(Weeks::new(52).unwrap()).await);
    // 840px fits exactly 52 columns with the default layout.
    assert!(!session.resize(840).await);
    assert_eq!(session.view().generation, 0);
    assert_eq!(c.call_count(), 0);
}

#[tokio::test]
async fn resize_derives_weeks_from_width() {
    let c = m_contrib("c", vec![]);
    let session = CalendarSession::new(orchestrator(c, 52), OCTOCAT).unwrap();

    // (500 - 60) / 15 = 29
    assert!(session.resize(500).await);
    assert_eq!(session.weeks().get(), 29);
    let state = session.settled().await.unwrap();
    assert_eq!(state.report().unwrap().calendar.weeks.len(), 29);

    // Narrower than the lower clamp.
    assert!(session.resize(100).await);
    assert_eq!(session.weeks().get(), 20);
}

#[test]
fn blank_user_is_rejected() {
    let c = m_contrib("c", vec![]);
    assert!(matches!(
        CalendarSession::new(orchestrator(c, 1), " "),
        Err(TesseraError::InvalidArg(_))
    ));
}
