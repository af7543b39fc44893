//! Contribution calendar pipeline: quantize, reconcile, bucket, label.

/// Week-aligned grid bucketing.
pub mod grid;
/// Month header labels for week columns.
pub mod labels;
/// Container width to week count.
pub mod layout;
/// Count to display level quantization.
pub mod level;
/// Merging the primary and secondary sources by date.
pub mod reconcile;

pub use grid::{build_calendar, end_of_week, start_of_range, start_of_week};
pub use labels::{month_labels, month_name};
pub use layout::weeks_for_width;
pub use level::{LEVEL_THRESHOLDS, quantize};
pub use reconcile::{Reconciled, event_date, parse_day, reconcile};
