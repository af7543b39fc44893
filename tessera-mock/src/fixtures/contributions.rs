use chrono::{Datelike, Days, NaiveDate, Weekday};
use tessera_core::ContributionEntry;

/// Days of history served before the anchor.
pub const HISTORY_DAYS: u64 = 365;
/// Days before the anchor the primary source has not caught up on, on top of the anchor itself.
pub const LAG_DAYS: u64 = 2;

fn provider_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        _ => 4,
    }
}

/// A year of deterministic entries ending `LAG_DAYS` before `anchor`.
pub fn year_ending(anchor: NaiveDate) -> Vec<ContributionEntry> {
    let Some(first) = anchor.checked_sub_days(Days::new(HISTORY_DAYS)) else {
        return Vec::new();
    };
    let Some(last) = anchor.checked_sub_days(Days::new(LAG_DAYS + 1)) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| *d <= last)
        .enumerate()
        .map(|(i, date)| {
            let seed = u32::try_from((i * 37 + 11) % 23).unwrap_or(0);
            let count = match date.weekday() {
                Weekday::Sat | Weekday::Sun => seed % 3,
                _ => seed % 9,
            };
            ContributionEntry::new(
                date.format("%Y-%m-%d").to_string(),
                count,
                provider_level(count),
            )
        })
        .collect()
}
