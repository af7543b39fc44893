use chrono::Datelike;
use tessera_types::ContributionCalendar;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Minimum number of week columns between two visible month labels.
pub const LABEL_SPACING: usize = 3;

/// Short English month name for a 1-based month number.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTHS.get(idx).copied()
}

/// One label slot per week column.
///
/// A column is labelled with the month of its first day when it is the first
/// column or the month changed since the previous column. Labels that would sit
/// closer than [`LABEL_SPACING`] columns to the next label are cleared, so the
/// later month wins.
#[must_use]
pub fn month_labels(calendar: &ContributionCalendar) -> Vec<Option<&'static str>> {
    let mut labels = Vec::with_capacity(calendar.weeks.len());
    let mut last_month = None;
    for week in &calendar.weeks {
        let month = week.first().map(|d| d.date.month());
        if month.is_some() && month != last_month {
            labels.push(month.and_then(month_name));
        } else {
            labels.push(None);
        }
        last_month = month;
    }

    for i in 0..labels.len() {
        if labels[i].is_none() {
            continue;
        }
        let crowded = labels
            .iter()
            .skip(i + 1)
            .take(LABEL_SPACING - 1)
            .any(Option::is_some);
        if crowded {
            labels[i] = None;
        }
    }
    labels
}
