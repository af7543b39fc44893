use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with connector role traits and allow consistent
/// Display formatting in error messages and spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Dated contribution counts with display levels (primary calendar source).
    Contributions,
    /// Recent timestamped public events (secondary calendar source).
    Events,
    /// Reconciled, week-aligned contribution calendar.
    Calendar,
    /// Live presence for a chat user.
    Presence,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contributions => "contributions",
            Self::Events => "events",
            Self::Calendar => "calendar",
            Self::Presence => "presence",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
