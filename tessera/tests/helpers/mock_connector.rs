#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tessera_core::connector::{ContributionsProvider, EventsProvider, PresenceProvider};
use tessera_core::{ActivityEvent, ContributionEntry, PresenceData, TesseraConnector, TesseraError};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// A capability is advertised only when its closure is set.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub contributions_fn:
        Option<Arc<dyn Fn(&str) -> Result<Vec<ContributionEntry>, TesseraError> + Send + Sync>>,
    pub events_fn:
        Option<Arc<dyn Fn(&str) -> Result<Vec<ActivityEvent>, TesseraError> + Send + Sync>>,
    pub presence_fn: Option<Arc<dyn Fn(&str) -> Result<PresenceData, TesseraError> + Send + Sync>>,
    pub calls: Arc<AtomicUsize>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            delay_ms: 0,
            contributions_fn: None,
            events_fn: None,
            presence_fn: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    /// Number of provider calls observed across all capabilities.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

#[async_trait]
impl ContributionsProvider for MockConnector {
    async fn contributions(&self, user: &str) -> Result<Vec<ContributionEntry>, TesseraError> {
        self.enter().await;
        match &self.contributions_fn {
            Some(f) => (f)(user),
            None => Err(TesseraError::unsupported("contributions")),
        }
    }
}

#[async_trait]
impl EventsProvider for MockConnector {
    async fn events(&self, user: &str) -> Result<Vec<ActivityEvent>, TesseraError> {
        self.enter().await;
        match &self.events_fn {
            Some(f) => (f)(user),
            None => Err(TesseraError::unsupported("events")),
        }
    }
}

#[async_trait]
impl PresenceProvider for MockConnector {
    async fn presence(&self, user_id: &str) -> Result<PresenceData, TesseraError> {
        self.enter().await;
        match &self.presence_fn {
            Some(f) => (f)(user_id),
            None => Err(TesseraError::unsupported("presence")),
        }
    }
}

impl TesseraConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_contributions_provider(&self) -> Option<&dyn ContributionsProvider> {
        if self.contributions_fn.is_some() {
            Some(self as &dyn ContributionsProvider)
        } else {
            None
        }
    }

    fn as_events_provider(&self) -> Option<&dyn EventsProvider> {
        if self.events_fn.is_some() {
            Some(self as &dyn EventsProvider)
        } else {
            None
        }
    }

    fn as_presence_provider(&self) -> Option<&dyn PresenceProvider> {
        if self.presence_fn.is_some() {
            Some(self as &dyn PresenceProvider)
        } else {
            None
        }
    }
}

pub struct MockConnectorBuilder {
    inner: MockConnector,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            inner: MockConnector::default(),
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.inner.name = name;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.inner.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn contributions(mut self, entries: Vec<ContributionEntry>) -> Self {
        self.inner.contributions_fn = Some(Arc::new(move |_| Ok(entries.clone())));
        self
    }

    pub fn contributions_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<ContributionEntry>, TesseraError> + Send + Sync + 'static,
    {
        self.inner.contributions_fn = Some(Arc::new(f));
        self
    }

    pub fn events(mut self, events: Vec<ActivityEvent>) -> Self {
        self.inner.events_fn = Some(Arc::new(move |_| Ok(events.clone())));
        self
    }

    pub fn events_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<ActivityEvent>, TesseraError> + Send + Sync + 'static,
    {
        self.inner.events_fn = Some(Arc::new(f));
        self
    }

    pub fn presence(mut self, data: PresenceData) -> Self {
        self.inner.presence_fn = Some(Arc::new(move |_| Ok(data.clone())));
        self
    }

    pub fn presence_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<PresenceData, TesseraError> + Send + Sync + 'static,
    {
        self.inner.presence_fn = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(self.inner)
    }
}
