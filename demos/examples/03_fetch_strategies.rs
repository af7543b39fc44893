use std::sync::Arc;
use std::time::Duration;

use tessera::{Capability, FetchStrategy, Tessera};
use tessera_demos::common::{get_connector, github_user};
use tessera_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let primary = get_connector();
    let fixtures: Arc<dyn tessera::TesseraConnector> = Arc::new(MockConnector::new());
    let user = github_user();

    // Default: PriorityWithFallback in registration order, no timeouts
    let sequential = Tessera::builder()
        .with_connector(primary.clone())
        .with_connector(fixtures.clone())
        .build()?;
    let entries = sequential.contributions(&user).await?;
    println!("priority: {} entries", entries.len());

    // Prefer the fixtures for contributions and bound each provider call
    let preferred = Tessera::builder()
        .with_connector(primary.clone())
        .with_connector(fixtures.clone())
        .prefer_for(Capability::Contributions, &[fixtures.clone()])
        .provider_timeout(Duration::from_secs(5))
        .build()?;
    let entries = preferred.contributions(&user).await?;
    println!("preferred: {} entries", entries.len());

    // Latency-first: fire all providers concurrently and take first success
    let racing = Tessera::builder()
        .with_connector(primary)
        .with_connector(fixtures)
        .fetch_strategy(FetchStrategy::Latency)
        .request_timeout(Duration::from_secs(10))
        .build()?;
    let entries = racing.contributions(&user).await?;
    println!("latency: {} entries", entries.len());

    println!("Demos ran successfully.");
    Ok(())
}
