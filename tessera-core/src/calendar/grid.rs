use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use tessera_types::{ContributionCalendar, ContributionDay, DayActivity, WeekRow, Weeks};

/// Saturday of the week containing `today` (weeks start on Sunday).
#[must_use]
pub fn end_of_week(today: NaiveDate) -> NaiveDate {
    let ahead = 6 - u64::from(today.weekday().num_days_from_sunday());
    today.checked_add_days(Days::new(ahead)).unwrap_or(today)
}

/// Sunday on or before `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// First date of a `weeks`-long range ending on `end`, rolled back to a Sunday.
#[must_use]
pub fn start_of_range(end: NaiveDate, weeks: Weeks) -> NaiveDate {
    let span = weeks.days().saturating_sub(1);
    let raw = end.checked_sub_days(Days::new(span)).unwrap_or(end);
    start_of_week(raw)
}

/// Bucket reconciled records into week rows ending on the current week's Saturday.
///
/// Every date from the Sunday-aligned start through that Saturday appears once,
/// oldest first; dates without a record are emitted with zero count and level.
/// A trailing partial row is kept rather than dropped.
#[must_use]
pub fn build_calendar(
    days: &BTreeMap<NaiveDate, DayActivity>,
    weeks: Weeks,
    today: NaiveDate,
) -> ContributionCalendar {
    let end = end_of_week(today);
    let start = start_of_range(end, weeks);

    let walked: Vec<ContributionDay> = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| match days.get(&date) {
            Some(activity) => ContributionDay::with_activity(date, *activity),
            None => ContributionDay::empty(date),
        })
        .collect();

    let total = walked.iter().map(|d| u64::from(d.count)).sum();
    let rows = walked
        .chunks(WeekRow::DAYS)
        .map(|chunk| WeekRow::new(chunk.to_vec()))
        .collect();

    ContributionCalendar {
        weeks: rows,
        total,
        start,
        end,
    }
}
