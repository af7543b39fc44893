use std::sync::Arc;

use tessera::{PresenceStatus, Tessera, TesseraError};
use tessera_mock::MockConnector as FixtureConnector;

fn tessera() -> Tessera {
    Tessera::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn listening_takes_precedence() {
    let summary = tessera().presence_summary("listening").await.unwrap();
    assert_eq!(summary.status, PresenceStatus::Online);
    assert_eq!(summary.headline(), "Listening to Spotify");
    assert_eq!(summary.activity_name.as_deref(), Some("Crab Rave"));
    assert_eq!(summary.activity_details.as_deref(), Some("by Noisestorm"));
    assert!(summary.image_url.is_some());
}

#[tokio::test]
async fn custom_status_is_skipped_for_the_activity_line() {
    let summary = tessera().presence_summary("playing").await.unwrap();
    assert_eq!(summary.headline(), "Playing");
    assert_eq!(summary.activity_name.as_deref(), Some("Launching rockets"));
    assert_eq!(summary.activity_details.as_deref(), Some("Space Age"));
    assert_eq!(summary.status_color, "#f23f43");
}

#[tokio::test]
async fn idle_without_activity_shows_status() {
    let summary = tessera().presence_summary("12345").await.unwrap();
    assert_eq!(summary.headline(), "idle");
    assert_eq!(summary.title(), "Discord: idle");
    assert_eq!(summary.display_name, "Ferris");
    assert_eq!(summary.profile_url, "https://discord.com/users/12345");
    assert_eq!(
        summary.avatar_url,
        "https://cdn.discordapp.com/embed/avatars/0.png"
    );
}

#[tokio::test]
async fn unknown_presence_user_is_not_found() {
    match tessera().presence("MISSING").await.unwrap_err() {
        TesseraError::NotFound { what } => assert_eq!(what, "presence for MISSING"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn fixture_events_failure_keeps_the_calendar() {
    let tessera = Tessera::builder()
        .with_connector(Arc::new(FixtureConnector::new()))
        .clock(Arc::new(tessera::FixedClock(FixtureConnector::default_anchor())))
        .build()
        .unwrap();

    let healthy = tessera
        .calendar("octocat", tessera::Weeks::DEFAULT)
        .await
        .unwrap();
    let degraded = tessera
        .calendar("EVENTS_FAIL", tessera::Weeks::DEFAULT)
        .await
        .unwrap();

    assert!(!healthy.is_degraded());
    assert!(degraded.is_degraded());
    assert!(degraded.calendar.total <= healthy.calendar.total);
    assert_eq!(degraded.calendar.day_count(), healthy.calendar.day_count());
}
