//! Tessera orchestrates contribution-calendar and presence requests across providers.
//!
//! Overview
//! - Routes requests to connectors that implement the `tessera_core` role traits.
//! - Applies per-capability priorities to influence provider order.
//! - Fetches the primary (contributions) and secondary (events) sources
//!   concurrently, reconciles them by date, and buckets the result into a
//!   week-aligned grid anchored on today.
//! - Owns the calendar view state machine through [`CalendarSession`].
//!
//! Key behaviors and trade-offs
//! - Fetch strategy:
//!   - `PriorityWithFallback`: deterministic order, aggregates errors; fewer
//!     concurrent requests but potentially higher latency.
//!   - `Latency`: races eligible providers; lowest tail latency but higher fanout.
//! - Secondary source: best effort. Its failure becomes a report warning and
//!   never fails the calendar.
//! - Timeouts: none by default. A hung primary leaves a session in `Loading`
//!   until a newer cycle or `stop` supersedes it, unless a provider or request
//!   timeout is configured.
//!
//! Examples
//! Building an orchestrator and fetching a calendar:
//! ```rust,ignore
//! use std::sync::Arc;
//! use tessera::{Tessera, Weeks};
//!
//! let tessera = Tessera::builder()
//!     .with_connector(Arc::new(GithubConnector::new_default()))
//!     .build()?;
//! let report = tessera.calendar("octocat", Weeks::new(52)?).await?;
//! println!("{}", report.calendar.summary());
//! ```
//!
//! Driving a view through resizes:
//! ```rust,ignore
//! let session = tessera::CalendarSession::new(Arc::new(tessera), "octocat")?;
//! session.start().await;
//! session.resize(640).await; // supersedes the first cycle
//! let state = session.settled().await?;
//! ```
//!
//! See `demos/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;
mod session;

pub use core::{Tessera, TesseraBuilder, tag_err};
pub use router::calendar::assemble_report;
pub use router::util::collapse_errors;
pub use session::{CalendarSession, CalendarState, CalendarView};

// Re-export core types for convenience
pub use tessera_core::{
    ActivityEvent, CalendarReport, Capability, Clock, ContributionCalendar, ContributionDay,
    ContributionEntry, FetchStrategy, FixedClock, LayoutConfig, Level, NaiveDate, PresenceData,
    PresenceStatus, PresenceSummary, SystemClock, TesseraConfig, TesseraConnector, TesseraError,
    WeekRow, Weeks,
};
