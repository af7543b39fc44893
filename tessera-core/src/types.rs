//! Re-export of foundational types from `tessera-types`.
// Consolidated re-exports so downstream crates can depend on `tessera-core` only

pub use tessera_types::{Capability, ConnectorKey, TesseraError};

pub use tessera_types::{CalendarReport, FetchStrategy, LayoutConfig, TesseraConfig};

pub use tessera_types::{
    ContributionCalendar, ContributionDay, DayActivity, Level, WeekRow, Weeks, group_thousands,
};

pub use tessera_types::{ActivityEvent, ContributionEntry};

pub use tessera_types::{
    ActivityAssets, DiscordUser, PresenceActivity, PresenceData, PresenceStatus, SpotifyTrack,
};

pub use chrono::NaiveDate;
