use tessera::{Tessera, Weeks};
use tessera_demos::common::{get_clock, get_connector, github_user, render_calendar};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tessera = Tessera::builder()
        .with_connector(get_connector())
        .clock(get_clock())
        .build()?;

    let user = github_user();
    let report = tessera.calendar(&user, Weeks::DEFAULT).await?;

    println!("GitHub activity for {user}");
    println!("{}", render_calendar(&report));
    if report.skipped > 0 {
        println!("({} records with unreadable dates were skipped)", report.skipped);
    }

    // Tooltip text for the busiest day in range.
    if let Some(day) = report.calendar.days().max_by_key(|d| d.count) {
        println!("Busiest: {} on {}", day.describe(), day.display_date());
    }
    Ok(())
}
