use tessera::Tessera;
use tessera_demos::common::{discord_user_id, get_presence_connector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tessera = Tessera::builder()
        .with_connector(get_presence_connector()?)
        .build()?;

    let summary = tessera.presence_summary(&discord_user_id()).await?;

    println!("{} ({})", summary.display_name, summary.profile_url);
    println!("  [{}] {}", summary.status_color, summary.headline());
    if let Some(name) = &summary.activity_name {
        println!("  {name}");
    }
    if let Some(details) = &summary.activity_details {
        println!("  {details}");
    }
    println!(
        "  image: {}",
        summary.image_url.as_deref().unwrap_or(&summary.avatar_url)
    );
    Ok(())
}
