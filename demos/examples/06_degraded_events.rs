use std::sync::Arc;

use tessera::{FixedClock, Tessera, Weeks};
use tessera_mock::MockConnector;

// Always runs on fixtures: the reserved user makes only the events source fail.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tessera = Tessera::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .clock(Arc::new(FixedClock(MockConnector::default_anchor())))
        .build()?;

    let full = tessera.calendar("octocat", Weeks::new(4)?).await?;
    let degraded = tessera.calendar("EVENTS_FAIL", Weeks::new(4)?).await?;

    println!("with events:    {}", full.calendar.summary());
    println!("without events: {}", degraded.calendar.summary());
    for w in &degraded.warnings {
        println!("  warning: {w}");
    }
    Ok(())
}
