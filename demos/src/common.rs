use std::fmt::Write as _;
use std::sync::Arc;

use tessera::{CalendarReport, Clock, FixedClock, SystemClock, TesseraConnector, TesseraError};
use tessera_core::calendar::month_labels;

/// Set to run every demo against deterministic fixtures instead of the network.
pub const USE_MOCK_ENV: &str = "TESSERA_DEMOS_USE_MOCK";

const GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];
const WEEKDAYS: [&str; 7] = ["   ", "Mon", "   ", "Wed", "   ", "Fri", "   "];

/// Whether the demos should use the mock connector.
#[must_use]
pub fn use_mock() -> bool {
    std::env::var(USE_MOCK_ENV).is_ok()
}

/// Return the calendar connector for demos.
///
/// # Panics
/// Panics if the default GitHub connector configuration fails to build.
#[must_use]
pub fn get_connector() -> Arc<dyn TesseraConnector> {
    if use_mock() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(tessera_mock::MockConnector::new())
    } else {
        Arc::new(tessera_github::GithubConnector::new_default())
    }
}

/// Return the presence connector for demos.
///
/// # Errors
/// Returns an error if the Lanyard HTTP client cannot be built.
pub fn get_presence_connector() -> Result<Arc<dyn TesseraConnector>, TesseraError> {
    if use_mock() {
        Ok(Arc::new(tessera_mock::MockConnector::new()))
    } else {
        Ok(Arc::new(tessera_lanyard::LanyardConnector::new_default()?))
    }
}

/// Clock matching the connector: fixture anchor under mock, system clock otherwise.
#[must_use]
pub fn get_clock() -> Arc<dyn Clock> {
    if use_mock() {
        Arc::new(FixedClock(tessera_mock::MockConnector::default_anchor()))
    } else {
        Arc::new(SystemClock::default())
    }
}

/// GitHub login to chart (`TESSERA_DEMOS_GITHUB_USER`, default `octocat`).
#[must_use]
pub fn github_user() -> String {
    std::env::var("TESSERA_DEMOS_GITHUB_USER").unwrap_or_else(|_| "octocat".to_string())
}

/// Discord user id to look up (`TESSERA_DEMOS_DISCORD_ID`).
#[must_use]
pub fn discord_user_id() -> String {
    std::env::var("TESSERA_DEMOS_DISCORD_ID").unwrap_or_else(|_| {
        if use_mock() {
            "listening".to_string()
        } else {
            "94490510688792576".to_string()
        }
    })
}

/// Render a report as a terminal heatmap: month labels, seven weekday rows, and the total.
#[must_use]
pub fn render_calendar(report: &CalendarReport) -> String {
    let cal = &report.calendar;
    let mut out = String::new();

    let mut header = vec![' '; cal.weeks.len() * 2 + 1];
    for (slot, label) in month_labels(cal).into_iter().enumerate() {
        if let Some(label) = label {
            for (i, ch) in label.chars().enumerate() {
                if let Some(cell) = header.get_mut(slot * 2 + i) {
                    *cell = ch;
                }
            }
        }
    }
    let _ = writeln!(out, "    {}", header.into_iter().collect::<String>().trim_end());

    for (row, name) in WEEKDAYS.iter().enumerate() {
        let _ = write!(out, "{name} ");
        for week in &cal.weeks {
            let glyph = week
                .days()
                .get(row)
                .and_then(|day| GLYPHS.get(usize::from(day.level.get())))
                .copied()
                .unwrap_or(' ');
            let _ = write!(out, "{glyph} ");
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "{} in the last {} weeks ({} to {})",
        cal.summary(),
        cal.weeks.len(),
        cal.start,
        cal.end
    );
    out
}
