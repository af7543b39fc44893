use std::sync::Arc;

use tessera::{CalendarSession, CalendarState, Tessera};
use tessera_demos::common::{get_clock, get_connector, github_user};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tessera = Arc::new(
        Tessera::builder()
            .with_connector(get_connector())
            .clock(get_clock())
            .build()?,
    );
    let session = CalendarSession::new(tessera, github_user())?;

    session.start().await;
    // A burst of resizes: each one supersedes the cycle before it.
    for width in [1200, 640, 480, 900] {
        let changed = session.resize(width).await;
        println!("width {width:>4}px -> {} weeks (new cycle: {changed})", session.weeks().get());
    }

    match session.settled().await? {
        CalendarState::Ready(report) => println!(
            "settled on generation {} with {} weeks, {}",
            session.view().generation,
            report.calendar.weeks.len(),
            report.calendar.summary()
        ),
        CalendarState::Failed(e) => println!("failed: {e} (call retry() to try again)"),
        other => println!("unexpected state: {other:?}"),
    }

    session.stop().await;
    Ok(())
}
