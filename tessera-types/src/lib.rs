//! Tessera data transfer objects, error type, and configuration primitives.
#![warn(missing_docs)]

mod activity;
mod capability;
mod config;
mod connector;
mod error;
mod presence;
mod reports;
mod wire;

pub use activity::{
    ContributionCalendar, ContributionDay, DayActivity, Level, WeekRow, Weeks, group_thousands,
};
pub use capability::Capability;
pub use config::{FetchStrategy, LayoutConfig, TesseraConfig};
pub use connector::ConnectorKey;
pub use error::TesseraError;
pub use presence::{
    ActivityAssets, DiscordUser, PresenceActivity, PresenceData, PresenceStatus, SpotifyTrack,
};
pub use reports::CalendarReport;
pub use wire::{ActivityEvent, ContributionEntry};
