use tessera_core::calendar::{build_calendar, reconcile};
use tessera_core::{
    ActivityEvent, CalendarReport, Capability, ContributionEntry, NaiveDate, TesseraError, Weeks,
};

use crate::Tessera;

/// Reconcile both sources and bucket the result into a grid anchored on `today`.
///
/// `events` is `None` when the secondary source was unavailable. `warnings`
/// is carried into the report unchanged.
#[must_use]
pub fn assemble_report(
    primary: &[ContributionEntry],
    events: Option<&[ActivityEvent]>,
    weeks: Weeks,
    today: NaiveDate,
    warnings: Vec<TesseraError>,
) -> CalendarReport {
    let reconciled = reconcile(primary, events);
    let calendar = build_calendar(&reconciled.days, weeks, today);
    CalendarReport {
        calendar,
        period_total: reconciled.total(),
        skipped: reconciled.skipped,
        warnings,
    }
}

impl Tessera {
    /// Fetch, reconcile, and bucket a user's contribution calendar.
    ///
    /// Behavior and trade-offs:
    /// - The primary (contributions) and secondary (events) sources are fetched
    ///   concurrently; reconciliation runs once both have settled.
    /// - A failed secondary fetch is never an error: it is logged, recorded in
    ///   `CalendarReport::warnings`, and the primary data is used alone. A missing
    ///   events capability is treated the same as an empty feed.
    /// - The grid is anchored on the configured clock's "today", read after the
    ///   fetches complete.
    ///
    /// # Errors
    /// Returns the primary source's error (after provider fallback), `InvalidArg`
    /// for a blank user, or `RequestTimeout` when the optional request deadline
    /// expires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tessera::router",
            skip(self),
            fields(user = %user, weeks = weeks.get()),
        )
    )]
    pub async fn calendar(&self, user: &str, weeks: Weeks) -> Result<CalendarReport, TesseraError> {
        crate::router::util::require_subject(user)?;

        let both = async { futures::join!(self.contributions(user), self.events(user)) };
        let (primary, secondary) =
            crate::core::with_request_deadline(self.cfg.request_timeout, both)
                .await
                .map_err(|_| TesseraError::request_timeout(Capability::Calendar.as_str()))?;
        let primary = primary?;

        let mut warnings = Vec::new();
        let events = match secondary {
            Ok(events) => Some(events),
            Err(TesseraError::Unsupported { .. }) => None,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(user = %user, error = %e, "events fetch failed; using contributions only");
                warnings.push(e);
                None
            }
        };

        Ok(assemble_report(
            &primary,
            events.as_deref(),
            weeks,
            self.today(),
            warnings,
        ))
    }
}
