use std::sync::Arc;

use tessera::{Tessera, Weeks};
use tessera_demos::common::{get_clock, get_connector, get_presence_connector, github_user};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,tessera=trace,tessera_github=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Create connectors (mock in CI when TESSERA_DEMOS_USE_MOCK is set) and build the router
    let tessera = Arc::new(
        Tessera::builder()
            .with_connector(get_connector())
            .with_connector(get_presence_connector()?)
            .clock(get_clock())
            .build()?,
    );

    let user = github_user();
    let _ = tessera.contributions(&user).await?;
    let _ = tessera.events(&user).await?;
    let report = tessera.calendar(&user, Weeks::DEFAULT).await?;
    tracing::info!(total = report.calendar.total, "calendar ready");

    Ok(())
}
