//! Mock connectors for CI-safe tests and demos.
//!
//! - [`MockConnector`] serves deterministic fixtures anchored on a fixed date.
//! - [`DynamicMockConnector`] defers every call to rules set through a
//!   [`DynamicMockController`].
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tessera_core::connector::{ContributionsProvider, EventsProvider, PresenceProvider};
use tessera_core::{ActivityEvent, ContributionEntry, PresenceData, TesseraConnector, TesseraError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::contributions::{HISTORY_DAYS, LAG_DAYS};

/// Mock connector for CI-safe demos. Provides deterministic data from static fixtures.
///
/// Reserved user names change the outcome:
/// - `FAIL`: every capability fails with a connector error.
/// - `MISSING`: every capability reports not found.
/// - `EVENTS_FAIL`: only the events capability fails.
/// - `SLOW`: every call waits 200ms first.
pub struct MockConnector {
    anchor: NaiveDate,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name used for priorities and error tagging.
    pub const NAME: &'static str = "tessera-mock";

    /// Fixtures anchored on [`MockConnector::default_anchor`].
    #[must_use]
    pub fn new() -> Self {
        Self::anchored_at(Self::default_anchor())
    }

    /// Fixtures whose most recent day is `anchor`.
    #[must_use]
    pub const fn anchored_at(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    /// Wednesday 2024-06-12.
    #[must_use]
    pub fn default_anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap_or(NaiveDate::MIN)
    }

    /// Date the fixtures end on; pair it with a fixed clock.
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    fn not_found(what: &str) -> TesseraError {
        TesseraError::not_found(what.to_string())
    }

    async fn maybe_fail_or_delay(user: &str, capability: &'static str) -> Result<(), TesseraError> {
        match user {
            "FAIL" => Err(TesseraError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "MISSING" => Err(Self::not_found(&format!("{capability} for {user}"))),
            "EVENTS_FAIL" if capability == "events" => Err(TesseraError::connector(
                Self::NAME,
                "Failed to fetch data: 503 Service Unavailable",
            )),
            "SLOW" => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl TesseraConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_contributions_provider(&self) -> Option<&dyn ContributionsProvider> {
        Some(self as &dyn ContributionsProvider)
    }

    fn as_events_provider(&self) -> Option<&dyn EventsProvider> {
        Some(self as &dyn EventsProvider)
    }

    fn as_presence_provider(&self) -> Option<&dyn PresenceProvider> {
        Some(self as &dyn PresenceProvider)
    }
}

#[async_trait]
impl ContributionsProvider for MockConnector {
    async fn contributions(&self, user: &str) -> Result<Vec<ContributionEntry>, TesseraError> {
        Self::maybe_fail_or_delay(user, "contributions").await?;
        Ok(fixtures::contributions::year_ending(self.anchor))
    }
}

#[async_trait]
impl EventsProvider for MockConnector {
    async fn events(&self, user: &str) -> Result<Vec<ActivityEvent>, TesseraError> {
        Self::maybe_fail_or_delay(user, "events").await?;
        Ok(fixtures::events::recent(self.anchor))
    }
}

#[async_trait]
impl PresenceProvider for MockConnector {
    async fn presence(&self, user_id: &str) -> Result<PresenceData, TesseraError> {
        Self::maybe_fail_or_delay(user_id, "presence").await?;
        fixtures::presence::by_user(user_id)
            .ok_or_else(|| Self::not_found(&format!("presence for {user_id}")))
    }
}
