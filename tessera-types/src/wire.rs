//! Raw records as delivered by the calendar sources.
//!
//! Dates are kept as strings so a single malformed record can be skipped
//! during reconciliation instead of failing the whole payload. A date field
//! holding anything other than a string decodes as unreadable rather than
//! rejecting the payload.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// One dated entry from the primary contributions source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionEntry {
    /// Calendar date as `YYYY-MM-DD`; empty when the source sent a non-string.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
    /// Number of contributions on the date.
    #[serde(default)]
    pub count: u32,
    /// Provider-assigned display level.
    #[serde(default)]
    pub level: u8,
}

impl ContributionEntry {
    /// Convenience constructor used by connectors and fixtures.
    pub fn new(date: impl Into<String>, count: u32, level: u8) -> Self {
        Self {
            date: date.into(),
            count,
            level,
        }
    }
}

/// One timestamped event from the secondary events source.
///
/// Only `created_at` matters for reconciliation; the event type is carried for
/// logging and demos.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// ISO-8601 creation timestamp, e.g. `2024-06-10T08:15:00Z`.
    #[serde(default, deserialize_with = "string_or_none")]
    pub created_at: Option<String>,
    /// Provider event type, e.g. `PushEvent`.
    #[serde(default, rename = "type", deserialize_with = "string_or_none")]
    pub kind: Option<String>,
}

impl ActivityEvent {
    /// Build an event carrying only a creation timestamp.
    pub fn at(created_at: impl Into<String>) -> Self {
        Self {
            created_at: Some(created_at.into()),
            kind: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientString {
    Text(String),
    Other(IgnoredAny),
}

fn string_or_none<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LenientString::deserialize(d)? {
        LenientString::Text(s) => Some(s),
        LenientString::Other(_) => None,
    })
}

fn string_or_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    string_or_none(d).map(Option::unwrap_or_default)
}
