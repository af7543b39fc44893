//! Calendar view state machine with last-request-wins refresh cycles.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

use tessera_core::calendar::weeks_for_width;
use tessera_core::{CalendarReport, TesseraError, Weeks};

use crate::Tessera;

/// What a calendar view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarState {
    /// No cycle has started yet, or the session was stopped before one finished.
    Idle,
    /// A cycle is in flight and the primary source has not resolved.
    Loading,
    /// The most recent cycle produced a grid.
    Ready(Arc<CalendarReport>),
    /// The most recent cycle's primary fetch failed; no grid is shown.
    Failed(TesseraError),
}

impl CalendarState {
    /// Whether a cycle is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Report of a successful cycle, if any.
    #[must_use]
    pub fn report(&self) -> Option<&CalendarReport> {
        match self {
            Self::Ready(report) => Some(report.as_ref()),
            _ => None,
        }
    }

    /// Error of a failed cycle, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&TesseraError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Snapshot published to subscribers after every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// Cycle counter; bumped each time a cycle starts or the session stops.
    pub generation: u64,
    /// Week count of the current (or last) cycle.
    pub weeks: Weeks,
    /// Current state.
    pub state: CalendarState,
}

struct Inner {
    tessera: Arc<Tessera>,
    user: String,
    tx: watch::Sender<CalendarView>,
    task: Mutex<Option<JoinHandle<()>>>,
}

/// Owns the calendar view for one user.
///
/// Each cycle fetches, reconciles, and buckets. Starting a new cycle aborts the
/// previous one, and a cycle only publishes while its generation is still the
/// current one, so a superseded response can never overwrite a newer grid.
/// Dropping the session aborts any in-flight cycle.
pub struct CalendarSession {
    inner: Arc<Inner>,
}

impl CalendarSession {
    /// Create an idle session for `user` using the orchestrator's default week count.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `user` is blank.
    pub fn new(tessera: Arc<Tessera>, user: impl Into<String>) -> Result<Self, TesseraError> {
        let user = user.into();
        crate::router::util::require_subject(&user)?;
        let (tx, _rx) = watch::channel(CalendarView {
            generation: 0,
            weeks: tessera.config().default_weeks,
            state: CalendarState::Idle,
        });
        Ok(Self {
            inner: Arc::new(Inner {
                tessera,
                user,
                tx,
                task: Mutex::new(None),
            }),
        })
    }

    /// User whose calendar this session shows.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.inner.user
    }

    /// Current snapshot.
    #[must_use]
    pub fn view(&self) -> CalendarView {
        self.inner.tx.borrow().clone()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> CalendarState {
        self.inner.tx.borrow().state.clone()
    }

    /// Week count of the current (or last) cycle.
    #[must_use]
    pub fn weeks(&self) -> Weeks {
        self.inner.tx.borrow().weeks
    }

    /// Receive every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CalendarView> {
        self.inner.tx.subscribe()
    }

    /// Begin a cycle with the current week count.
    pub async fn start(&self) {
        self.begin_cycle(None).await;
    }

    /// Run a fresh cycle with the current week count, typically after `Failed`.
    pub async fn retry(&self) {
        self.begin_cycle(None).await;
    }

    /// Switch to `weeks` and run a fresh cycle.
    ///
    /// Returns `false` without doing anything when `weeks` is unchanged.
    pub async fn set_weeks(&self, weeks: Weeks) -> bool {
        if self.weeks() == weeks {
            return false;
        }
        self.begin_cycle(Some(weeks)).await;
        true
    }

    /// Derive the week count from a container width and apply it via [`set_weeks`].
    ///
    /// [`set_weeks`]: CalendarSession::set_weeks
    pub async fn resize(&self, width_px: u32) -> bool {
        let weeks = weeks_for_width(width_px, &self.inner.tessera.config().layout);
        self.set_weeks(weeks).await
    }

    /// Abort any in-flight cycle.
    ///
    /// A `Loading` view returns to `Idle`; a settled view keeps its state.
    pub async fn stop(&self) {
        let mut task = self.inner.task.lock().await;
        self.inner.tx.send_modify(|view| {
            view.generation += 1;
            if view.state.is_loading() {
                view.state = CalendarState::Idle;
            }
        });
        if let Some(prev) = task.take() {
            prev.abort();
        }
    }

    /// Wait until no cycle is in flight and return the settled state.
    ///
    /// # Errors
    /// Returns `Other` if the session's channel closed while waiting.
    pub async fn settled(&self) -> Result<CalendarState, TesseraError> {
        let mut rx = self.subscribe();
        let view = rx
            .wait_for(|view| !view.state.is_loading())
            .await
            .map_err(|_| TesseraError::Other("calendar session closed".to_string()))?;
        Ok(view.state.clone())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "tessera::session",
            skip(self),
            fields(user = %self.inner.user),
        )
    )]
    async fn begin_cycle(&self, weeks: Option<Weeks>) {
        let mut task = self.inner.task.lock().await;

        let mut generation = 0;
        let mut cycle_weeks = Weeks::DEFAULT;
        self.inner.tx.send_modify(|view| {
            view.generation += 1;
            if let Some(w) = weeks {
                view.weeks = w;
            }
            view.state = CalendarState::Loading;
            generation = view.generation;
            cycle_weeks = view.weeks;
        });

        if let Some(prev) = task.take() {
            prev.abort();
        }

        let inner = Arc::clone(&self.inner);
        *task = Some(tokio::spawn(async move {
            let next = match inner.tessera.calendar(&inner.user, cycle_weeks).await {
                Ok(report) => CalendarState::Ready(Arc::new(report)),
                Err(e) => CalendarState::Failed(e),
            };
            let published = publish_if_current(&inner.tx, generation, next);
            #[cfg(feature = "tracing")]
            if !published {
                tracing::debug!(generation, "discarding superseded calendar cycle");
            }
            #[cfg(not(feature = "tracing"))]
            let _ = published;
        }));
    }
}

/// Publish `next` only while `generation` is still the view's current cycle.
///
/// The comparison runs under the channel's write lock, so a cycle that lost a
/// race with `begin_cycle` or `stop` neither writes nor wakes subscribers.
fn publish_if_current(
    tx: &watch::Sender<CalendarView>,
    generation: u64,
    next: CalendarState,
) -> bool {
    tx.send_if_modified(|view| {
        if view.generation != generation {
            return false;
        }
        view.state = next;
        true
    })
}

impl Drop for CalendarSession {
    fn drop(&mut self) {
        if let Ok(mut task) = self.inner.task.try_lock()
            && let Some(handle) = task.take()
        {
            handle.abort();
        }
    }
}
