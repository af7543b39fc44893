//! tessera-core
//!
//! Connector traits and the pure calendar pipeline shared across the tessera
//! workspace.
//!
//! - `connector`: the `TesseraConnector` trait and capability role traits.
//! - `calendar`: quantization, reconciliation of the primary and secondary
//!   sources, week-aligned grid bucketing, month labels, and responsive layout.
//! - `clock`: injectable "today" for anchoring the grid.
//! - `presence`: view model for a presence card.
//! - `text`: text segmentation for reveal animations.
//! - `types`: re-exports from `tessera-types`.
//!
//! Nothing in this crate performs I/O. Given the same inputs and the same
//! clock, every function returns the same output.
#![warn(missing_docs)]

/// Calendar pipeline: quantize, reconcile, bucket, label.
pub mod calendar;
/// Clock abstraction used to anchor the grid on "today".
pub mod clock;
/// Connector capability traits and the primary `TesseraConnector` interface.
pub mod connector;
pub mod presence;
pub mod text;
pub mod types;

pub use calendar::{
    Reconciled, build_calendar, month_labels, quantize, reconcile, weeks_for_width,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use connector::{ContributionsProvider, EventsProvider, PresenceProvider, TesseraConnector};
pub use presence::PresenceSummary;
pub use text::{RevealTiming, Segment, SegmentKind, SplitMode, segment};
pub use types::*;
