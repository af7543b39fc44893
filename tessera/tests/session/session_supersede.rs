use std::sync::Arc;
use std::time::Duration;

use tessera::{CalendarSession, CalendarState, Capability, Tessera, Weeks};
use tessera_mock::{DynamicMockConnector, DynamicMockController, MockBehavior};

use crate::helpers::{OCTOCAT, entry, fixed_clock};

fn session_over(conn: Arc<dyn tessera::TesseraConnector>) -> CalendarSession {
    let tessera = Tessera::builder()
        .with_connector(conn)
        .default_weeks(Weeks::new(52).unwrap())
        .clock(fixed_clock())
        .build()
        .unwrap();
    CalendarSession::new(Arc::new(tessera), OCTOCAT).unwrap()
}

async fn wait_for_calls(ctl: &DynamicMockController, n: usize) {
    while ctl.calls(Capability::Contributions).await.len() < n {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn late_response_never_overwrites_a_newer_grid() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    // First cycle resolves late with stale data; later cycles resolve at once.
    ctl.queue_contributions_behavior(
        OCTOCAT,
        MockBehavior::Delayed(Duration::from_millis(500), vec![entry("2024-06-10", 99, 4)]),
    )
    .await;
    ctl.set_contributions_behavior(OCTOCAT, MockBehavior::Return(vec![entry("2024-06-10", 1, 1)]))
        .await;

    let session = session_over(conn);
    session.start().await;
    wait_for_calls(&ctl, 1).await;

    assert!(session.resize(500).await);
    let newer = session.settled().await.unwrap();
    let generation = session.view().generation;
    assert_eq!(generation, 2);
    assert_eq!(newer.report().unwrap().calendar.weeks.len(), 29);
    assert_eq!(newer.report().unwrap().calendar.total, 1);

    // Let the superseded fetch's deadline pass.
    tokio::time::sleep(Duration::from_secs(2)).await;

    let view = session.view();
    assert_eq!(view.generation, generation);
    assert_eq!(view.weeks.get(), 29);
    assert_eq!(view.state.report().unwrap().calendar.total, 1);
}

#[tokio::test(start_paused = true)]
async fn stop_returns_a_loading_view_to_idle() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_contributions_behavior(OCTOCAT, MockBehavior::Hang).await;

    let session = session_over(conn);
    session.start().await;
    wait_for_calls(&ctl, 1).await;
    assert!(session.state().is_loading());

    session.stop().await;
    assert_eq!(session.state(), CalendarState::Idle);
    assert_eq!(session.settled().await.unwrap(), CalendarState::Idle);
}

#[tokio::test(start_paused = true)]
async fn stop_keeps_a_settled_grid() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_contributions_behavior(OCTOCAT, MockBehavior::Return(vec![entry("2024-06-12", 2, 1)]))
        .await;

    let session = session_over(conn);
    session.start().await;
    let ready = session.settled().await.unwrap();

    session.stop().await;
    assert_eq!(session.state(), ready);
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_the_final_view() {
    let (conn, ctl) = DynamicMockConnector::new_with_controller("dyn");
    ctl.set_contributions_behavior(
        OCTOCAT,
        MockBehavior::Delayed(Duration::from_millis(100), vec![]),
    )
    .await;

    let session = session_over(conn);
    let mut rx = session.subscribe();
    session.start().await;
    assert!(rx.borrow_and_update().state.is_loading());

    rx.changed().await.unwrap();
    let view = rx.borrow_and_update().clone();
    assert_eq!(view.generation, 1);
    assert!(matches!(view.state, CalendarState::Ready(_)));
}
