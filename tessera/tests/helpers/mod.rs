// Re-export helpers so tests can `use helpers::*;`
#![allow(dead_code)]

pub mod mock_connector;

use std::sync::Arc;

pub use mock_connector::MockConnector;

use tessera::{ActivityEvent, ContributionEntry, FixedClock, NaiveDate, TesseraConnector};

// ---------- Lightweight fixtures and helpers for tests ----------

/// Common user constants used across tests.
pub const OCTOCAT: &str = "octocat";
pub const GHOST: &str = "ghost";

/// Construct a date without unwrap noise in tests.
pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid static test date")
}

/// Wednesday used as "today" throughout the router and session tests.
pub fn wednesday() -> NaiveDate {
    d(2024, 6, 12)
}

/// Clock pinned to [`wednesday`].
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(wednesday()))
}

/// Shorthand for a primary entry.
pub fn entry(date: &str, count: u32, level: u8) -> ContributionEntry {
    ContributionEntry::new(date, count, level)
}

/// `n` events stamped at noon UTC on `date`.
pub fn events_on(date: &str, n: usize) -> Vec<ActivityEvent> {
    (0..n)
        .map(|_| ActivityEvent::at(format!("{date}T12:00:00Z")))
        .collect()
}

/// Contributions-only connector returning `entries`.
pub fn m_contrib(name: &'static str, entries: Vec<ContributionEntry>) -> Arc<MockConnector> {
    MockConnector::builder()
        .name(name)
        .contributions(entries)
        .build()
}

/// Upcast for builder APIs that take trait objects.
pub fn dyn_conn(c: &Arc<MockConnector>) -> Arc<dyn TesseraConnector> {
    c.clone()
}
