//! Calendar activity model: levels, days, week rows, and the assembled calendar.

use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TesseraError;

/// Display-intensity bucket for a day, always within `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    /// No activity.
    pub const NONE: Self = Self(0);
    /// Highest intensity bucket.
    pub const MAX: Self = Self(4);

    /// Build a level, returning `None` when `raw` is above [`Level::MAX`].
    #[must_use]
    pub const fn new(raw: u8) -> Option<Self> {
        if raw <= Self::MAX.0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Build a level, saturating anything above [`Level::MAX`].
    #[must_use]
    pub const fn clamped(raw: u8) -> Self {
        if raw > Self::MAX.0 { Self::MAX } else { Self(raw) }
    }

    /// Raw bucket value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Level {
    type Error = TesseraError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| TesseraError::InvalidArg(format!("level out of range: {raw}")))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Count and level recorded for one date, before it is placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayActivity {
    /// Number of activity events on the date.
    pub count: u32,
    /// Display bucket for the date.
    pub level: Level,
}

/// One calendar date's activity summary as placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    /// Calendar date (no time component).
    pub date: NaiveDate,
    /// Number of activity events on the date.
    pub count: u32,
    /// Display bucket for the date.
    pub level: Level,
}

impl ContributionDay {
    /// A day with no recorded activity.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            count: 0,
            level: Level::NONE,
        }
    }

    /// Place a reconciled record on a date.
    #[must_use]
    pub const fn with_activity(date: NaiveDate, activity: DayActivity) -> Self {
        Self {
            date,
            count: activity.count,
            level: activity.level,
        }
    }

    /// Tooltip headline: "No contributions", "1 contribution", or "N contributions".
    #[must_use]
    pub fn describe(&self) -> String {
        match self.count {
            0 => "No contributions".to_string(),
            1 => "1 contribution".to_string(),
            n => format!("{n} contributions"),
        }
    }

    /// Tooltip date line, e.g. "Wed, Jun 12, 2024".
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.format("%a, %b %-d, %Y").to_string()
    }
}

/// Up to seven consecutive days, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekRow(Vec<ContributionDay>);

impl WeekRow {
    /// Number of days in a complete row.
    pub const DAYS: usize = 7;

    /// Wrap an ordered run of days.
    #[must_use]
    pub const fn new(days: Vec<ContributionDay>) -> Self {
        Self(days)
    }

    /// Days in walk order.
    #[must_use]
    pub fn days(&self) -> &[ContributionDay] {
        &self.0
    }

    /// First day of the row, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ContributionDay> {
        self.0.first()
    }

    /// Whether the row holds a full week.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.len() == Self::DAYS
    }

    /// Sum of counts in the row.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|d| u64::from(d.count)).sum()
    }
}

/// Validated, positive number of weeks requested for a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Weeks(u16);

impl Weeks {
    /// Roughly one year of weeks.
    pub const DEFAULT: Self = Self(52);

    /// Validate a week count.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `n` is zero.
    pub fn new(n: u16) -> Result<Self, TesseraError> {
        if n == 0 {
            return Err(TesseraError::InvalidArg(
                "weeks must be at least 1".to_string(),
            ));
        }
        Ok(Self(n))
    }

    /// Raw week count.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Number of days covered by this many complete weeks.
    #[must_use]
    pub const fn days(self) -> u64 {
        self.0 as u64 * 7
    }
}

impl Default for Weeks {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for Weeks {
    type Error = TesseraError;

    fn try_from(n: u16) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Weeks> for u16 {
    fn from(w: Weeks) -> Self {
        w.0
    }
}

/// Week-major heatmap grid anchored on the current week, plus its summed count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    /// Week rows, oldest first.
    pub weeks: Vec<WeekRow>,
    /// Sum of counts over every emitted day.
    pub total: u64,
    /// First emitted date (a Sunday).
    pub start: NaiveDate,
    /// Last emitted date (the Saturday of the current week).
    pub end: NaiveDate,
}

impl ContributionCalendar {
    /// All days in walk order.
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(WeekRow::days)
    }

    /// Number of emitted days.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.days().len()).sum()
    }

    /// Look up the emitted entry for a date.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&ContributionDay> {
        if date < self.start || date > self.end {
            return None;
        }
        self.days().find(|d| d.date == date)
    }

    /// Human-readable total, e.g. "1,234 contributions".
    #[must_use]
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 {
            "contribution"
        } else {
            "contributions"
        };
        format!("{} {noun}", group_thousands(self.total))
    }
}

/// Format an integer with comma thousands separators.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
