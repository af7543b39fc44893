use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, NaiveDate};
use tessera_types::{ActivityEvent, ContributionEntry, DayActivity, Level};

use super::level::quantize;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Per-date records after merging the primary and secondary sources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciled {
    /// One record per date, ascending.
    pub days: BTreeMap<NaiveDate, DayActivity>,
    /// Primary entries and events dropped because their date was unreadable.
    pub skipped: usize,
}

impl Reconciled {
    /// Sum of every reconciled count.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.days.values().map(|a| u64::from(a.count)).sum()
    }

    /// Reconciled record for `date`, if either source reported one.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<DayActivity> {
        self.days.get(&date).copied()
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
#[must_use]
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DAY_FORMAT).ok()
}

/// Truncate an event timestamp to its calendar date.
///
/// RFC 3339 timestamps keep the date in their own offset (the same as cutting
/// the string at `T`). Anything else must at least start with `YYYY-MM-DD`.
#[must_use]
pub fn event_date(ts: &str) -> Option<NaiveDate> {
    let ts = ts.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.date_naive());
    }
    ts.get(..10).and_then(parse_day)
}

/// Index primary entries by date.
///
/// Later duplicates overwrite earlier ones; levels above 4 are clamped.
/// Returns the map and the number of entries with unreadable dates.
#[must_use]
pub fn index_primary(entries: &[ContributionEntry]) -> (BTreeMap<NaiveDate, DayActivity>, usize) {
    let mut days = BTreeMap::new();
    let mut skipped = 0;
    for entry in entries {
        let Some(date) = parse_day(&entry.date) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(date = %entry.date, "skipping contribution entry with malformed date");
            skipped += 1;
            continue;
        };
        days.insert(
            date,
            DayActivity {
                count: entry.count,
                level: Level::clamped(entry.level),
            },
        );
    }
    (days, skipped)
}

/// Count events per calendar date.
///
/// Returns the counts and the number of events without a readable timestamp.
#[must_use]
pub fn count_events(events: &[ActivityEvent]) -> (BTreeMap<NaiveDate, u32>, usize) {
    let mut counts: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    let mut skipped = 0;
    for event in events {
        match event.created_at.as_deref().and_then(event_date) {
            Some(date) => {
                let slot = counts.entry(date).or_insert(0);
                *slot = slot.saturating_add(1);
            }
            None => skipped += 1,
        }
    }
    (counts, skipped)
}

/// Overlay per-date event counts onto primary records.
///
/// A date is written only when the primary has no record or a strictly lower
/// count; the written level is recomputed from the event count.
pub fn apply_event_counts(
    days: &mut BTreeMap<NaiveDate, DayActivity>,
    counts: &BTreeMap<NaiveDate, u32>,
) {
    for (&date, &count) in counts {
        let patched = DayActivity {
            count,
            level: quantize(count),
        };
        match days.entry(date) {
            Entry::Vacant(v) => {
                v.insert(patched);
            }
            Entry::Occupied(mut o) => {
                if count > o.get().count {
                    o.insert(patched);
                }
            }
        }
    }
}

/// Merge the primary contributions with the secondary events.
///
/// `events` is `None` when the secondary source was unavailable; the primary
/// records then pass through unchanged.
#[must_use]
pub fn reconcile(primary: &[ContributionEntry], events: Option<&[ActivityEvent]>) -> Reconciled {
    let (mut days, mut skipped) = index_primary(primary);
    if let Some(events) = events {
        let (counts, bad_events) = count_events(events);
        skipped += bad_events;
        apply_event_counts(&mut days, &counts);
    }
    Reconciled { days, skipped }
}
