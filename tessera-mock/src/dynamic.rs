use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tessera_core::connector::{ContributionsProvider, EventsProvider, PresenceProvider};
use tessera_core::{
    ActivityEvent, Capability, ContributionEntry, PresenceData, TesseraConnector, TesseraError,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after a delay.
    Delayed(Duration, T),
    /// Fail immediately with the provided error.
    Fail(TesseraError),
    /// Hang indefinitely (simulate a stalled request).
    Hang,
}

/// Standing rule plus one-shot behaviors consumed first, in order.
struct Rules<T> {
    standing: HashMap<String, MockBehavior<T>>,
    queued: HashMap<String, VecDeque<MockBehavior<T>>>,
}

impl<T: Clone> Rules<T> {
    fn next(&mut self, user: &str) -> Option<MockBehavior<T>> {
        if let Some(b) = self.queued.get_mut(user).and_then(VecDeque::pop_front) {
            return Some(b);
        }
        self.standing.get(user).cloned()
    }

    fn clear(&mut self) {
        self.standing.clear();
        self.queued.clear();
    }
}

impl<T> Default for Rules<T> {
    fn default() -> Self {
        Self {
            standing: HashMap::new(),
            queued: HashMap::new(),
        }
    }
}

#[derive(Default)]
struct InternalState {
    contributions: Rules<Vec<ContributionEntry>>,
    events: Rules<Vec<ActivityEvent>>,
    presence: Rules<PresenceData>,
    calls: HashMap<Capability, Vec<String>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the standing behavior for `contributions` calls for a user.
    pub async fn set_contributions_behavior(
        &self,
        user: &str,
        behavior: MockBehavior<Vec<ContributionEntry>>,
    ) {
        let mut guard = self.state.lock().await;
        guard
            .contributions
            .standing
            .insert(user.to_string(), behavior);
    }

    /// Queue a one-shot behavior for the next `contributions` call for a user.
    pub async fn queue_contributions_behavior(
        &self,
        user: &str,
        behavior: MockBehavior<Vec<ContributionEntry>>,
    ) {
        let mut guard = self.state.lock().await;
        guard
            .contributions
            .queued
            .entry(user.to_string())
            .or_default()
            .push_back(behavior);
    }

    /// Set the standing behavior for `events` calls for a user.
    pub async fn set_events_behavior(&self, user: &str, behavior: MockBehavior<Vec<ActivityEvent>>) {
        let mut guard = self.state.lock().await;
        guard.events.standing.insert(user.to_string(), behavior);
    }

    /// Queue a one-shot behavior for the next `events` call for a user.
    pub async fn queue_events_behavior(
        &self,
        user: &str,
        behavior: MockBehavior<Vec<ActivityEvent>>,
    ) {
        let mut guard = self.state.lock().await;
        guard
            .events
            .queued
            .entry(user.to_string())
            .or_default()
            .push_back(behavior);
    }

    /// Set the standing behavior for `presence` calls for a user id.
    pub async fn set_presence_behavior(&self, user_id: &str, behavior: MockBehavior<PresenceData>) {
        let mut guard = self.state.lock().await;
        guard.presence.standing.insert(user_id.to_string(), behavior);
    }

    /// Users passed to a capability, in call order.
    pub async fn calls(&self, capability: Capability) -> Vec<String> {
        let guard = self.state.lock().await;
        guard.calls.get(&capability).cloned().unwrap_or_default()
    }

    /// Clear all configured behaviors and call logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.contributions.clear();
        guard.events.clear();
        guard.presence.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn TesseraConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn TesseraConnector>, controller)
    }

    async fn log(&self, capability: Capability, user: &str) {
        let mut guard = self.state.lock().await;
        guard
            .calls
            .entry(capability)
            .or_default()
            .push(user.to_string());
    }
}

async fn resolve<T>(behavior: Option<MockBehavior<T>>, capability: Capability) -> Result<T, TesseraError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Delayed(wait, v)) => {
            tokio::time::sleep(wait).await;
            Ok(v)
        }
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => std::future::pending().await,
        None => Err(TesseraError::unsupported(capability.as_str())),
    }
}

impl TesseraConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl ContributionsProvider for DynamicMockConnector {
    async fn contributions(&self, user: &str) -> Result<Vec<ContributionEntry>, TesseraError> {
        self.log(Capability::Contributions, user).await;
        // Acquire behavior snapshot without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.contributions.next(user)
        };
        resolve(behavior, Capability::Contributions).await
    }
}

#[async_trait]
impl EventsProvider for DynamicMockConnector {
    async fn events(&self, user: &str) -> Result<Vec<ActivityEvent>, TesseraError> {
        self.log(Capability::Events, user).await;
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.events.next(user)
        };
        resolve(behavior, Capability::Events).await
    }
}

#[async_trait]
impl PresenceProvider for DynamicMockConnector {
    async fn presence(&self, user_id: &str) -> Result<PresenceData, TesseraError> {
        self.log(Capability::Presence, user_id).await;
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.presence.next(user_id)
        };
        resolve(behavior, Capability::Presence).await
    }
}
