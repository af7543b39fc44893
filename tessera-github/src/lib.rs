//! tessera-github
//!
//! Public connector that implements `TesseraConnector` on top of two HTTP
//! sources: the contributions calendar API (primary) and GitHub's public
//! events API (secondary, for activity the calendar has not caught up to).
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;

use std::sync::Arc;

use adapter::{CloneArcAdapters, GhContributions, GhEvents, RealAdapter};
use async_trait::async_trait;
use tessera_core::{
    ActivityEvent, ContributionEntry, TesseraError,
    connector::{ConnectorKey, ContributionsProvider, EventsProvider, TesseraConnector},
};

pub use builder::GithubConnectorBuilder;

/// Public connector type. Production users will construct with `GithubConnector::new_default()`.
pub struct GithubConnector {
    contributions: Arc<dyn GhContributions>,
    events: Arc<dyn GhEvents>,
}

impl GithubConnector {
    /// Connector name used for priorities and error tagging.
    pub const NAME: &'static str = "tessera-github";
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(Self::NAME);

    fn normalize_error(e: TesseraError, what: &str) -> TesseraError {
        match e {
            TesseraError::Connector { connector: _, msg } => TesseraError::connector(Self::NAME, msg),
            TesseraError::NotFound { .. } => TesseraError::not_found(what.to_string()),
            TesseraError::Other(msg) => TesseraError::connector(Self::NAME, msg),
            other => other,
        }
    }

    /// Build against the public endpoints with a fresh HTTP client.
    ///
    /// # Panics
    /// Panics only if the built-in default endpoint URLs fail to parse or the
    /// TLS backend cannot initialize; use [`GithubConnector::builder`] to
    /// handle those as errors.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder()
            .build()
            .expect("default github connector configuration is valid")
    }

    /// Start configuring endpoints, user agent, or the HTTP client.
    #[must_use]
    pub fn builder() -> GithubConnectorBuilder {
        GithubConnectorBuilder::new()
    }

    /// Build from adapters; used by the builder and for test injection.
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            contributions: adapter.clone_arc_contributions(),
            events: adapter.clone_arc_events(),
        }
    }

    pub(crate) fn from_real(adapter: &RealAdapter) -> Self {
        Self::from_adapter(adapter)
    }
}

#[async_trait]
impl ContributionsProvider for GithubConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tessera_github::contributions",
            skip(self),
            fields(user = %user),
        )
    )]
    async fn contributions(&self, user: &str) -> Result<Vec<ContributionEntry>, TesseraError> {
        self.contributions
            .fetch(user)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("contributions for {user}")))
    }
}

#[async_trait]
impl EventsProvider for GithubConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tessera_github::events",
            skip(self),
            fields(user = %user),
        )
    )]
    async fn events(&self, user: &str) -> Result<Vec<ActivityEvent>, TesseraError> {
        self.events
            .fetch(user)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("events for {user}")))
    }
}

impl TesseraConnector for GithubConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "GitHub"
    }

    fn as_contributions_provider(&self) -> Option<&dyn ContributionsProvider> {
        Some(self as &dyn ContributionsProvider)
    }

    fn as_events_provider(&self) -> Option<&dyn EventsProvider> {
        Some(self as &dyn EventsProvider)
    }
}
