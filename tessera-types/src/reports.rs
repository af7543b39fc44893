//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::activity::ContributionCalendar;
use crate::error::TesseraError;

/// Result of one fetch-reconcile-bucket cycle.
///
/// Carries the assembled calendar and any non-fatal issues encountered while
/// building it, such as a failed secondary events fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarReport {
    /// Week-aligned grid plus its in-range total.
    pub calendar: ContributionCalendar,
    /// Sum of every reconciled count the sources returned, in range or not.
    pub period_total: u64,
    /// Records dropped because their date could not be read.
    pub skipped: usize,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<TesseraError>,
}

impl CalendarReport {
    /// Whether the secondary source contributed nothing because it failed.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}
