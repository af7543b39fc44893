use async_trait::async_trait;

use crate::TesseraError;
pub use tessera_types::ConnectorKey;
use tessera_types::{ActivityEvent, ContributionEntry, PresenceData};

/// Focused role trait for connectors that provide dated contribution counts.
///
/// This is the primary, authoritative calendar source. It may lag for the
/// most recent days.
#[async_trait]
pub trait ContributionsProvider: Send + Sync {
    /// Fetch the contribution entries for `user` over the provider's default window
    /// (typically the last year).
    async fn contributions(&self, user: &str) -> Result<Vec<ContributionEntry>, TesseraError>;
}

/// Focused role trait for connectors that provide recent public events.
///
/// Used only to patch in activity the contributions source has not caught up to.
#[async_trait]
pub trait EventsProvider: Send + Sync {
    /// Fetch the most recent public events for `user`.
    async fn events(&self, user: &str) -> Result<Vec<ActivityEvent>, TesseraError>;
}

/// Focused role trait for connectors that provide chat presence.
#[async_trait]
pub trait PresenceProvider: Send + Sync {
    /// Fetch the current presence snapshot for `user_id`.
    async fn presence(&self, user_id: &str) -> Result<PresenceData, TesseraError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait TesseraConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "tessera-github").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for the contributions source.
    fn as_contributions_provider(&self) -> Option<&dyn ContributionsProvider> {
        None
    }

    /// If implemented, returns a trait object for the events source.
    fn as_events_provider(&self) -> Option<&dyn EventsProvider> {
        None
    }

    /// If implemented, returns a trait object for presence lookups.
    fn as_presence_provider(&self) -> Option<&dyn PresenceProvider> {
        None
    }
}
