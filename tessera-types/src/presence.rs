//! Chat presence payloads (Lanyard's Discord presence shape).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Online status reported for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    /// Active.
    Online,
    /// Away.
    Idle,
    /// Do not disturb.
    Dnd,
    /// Offline or invisible.
    #[default]
    #[serde(other)]
    Offline,
}

impl PresenceStatus {
    /// Lowercase wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::Dnd => "dnd",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account the presence belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscordUser {
    /// Snowflake id.
    pub id: String,
    /// Account name.
    pub username: String,
    /// Display name, when set.
    #[serde(default)]
    pub global_name: Option<String>,
    /// Avatar hash; absent for default avatars.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Legacy discriminator ("0" for migrated accounts).
    #[serde(default)]
    pub discriminator: String,
}

/// Artwork references attached to an activity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityAssets {
    /// Large image key or URL.
    #[serde(default)]
    pub large_image: Option<String>,
    /// Small image key or URL.
    #[serde(default)]
    pub small_image: Option<String>,
}

/// A rich-presence activity (game, custom status, listening, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresenceActivity {
    /// Activity name, e.g. the game title.
    pub name: String,
    /// Activity type code; 4 is a custom status.
    #[serde(rename = "type")]
    pub kind: u8,
    /// First detail line.
    #[serde(default)]
    pub details: Option<String>,
    /// Second detail line.
    #[serde(default)]
    pub state: Option<String>,
    /// Artwork, when provided.
    #[serde(default)]
    pub assets: Option<ActivityAssets>,
}

impl PresenceActivity {
    /// Activity type code of a custom status.
    pub const CUSTOM_STATUS: u8 = 4;

    /// Whether this is a custom status rather than a real activity.
    #[must_use]
    pub const fn is_custom_status(&self) -> bool {
        self.kind == Self::CUSTOM_STATUS
    }
}

/// Currently playing track.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpotifyTrack {
    /// Track title.
    pub song: String,
    /// Artist line.
    pub artist: String,
    /// Album cover URL.
    #[serde(default)]
    pub album_art_url: Option<String>,
}

/// Full presence snapshot for a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresenceData {
    /// Account details.
    pub discord_user: DiscordUser,
    /// Online status.
    #[serde(default)]
    pub discord_status: PresenceStatus,
    /// Activities in provider order.
    #[serde(default)]
    pub activities: Vec<PresenceActivity>,
    /// Whether a track is playing.
    #[serde(default)]
    pub listening_to_spotify: bool,
    /// Track details when listening.
    #[serde(default)]
    pub spotify: Option<SpotifyTrack>,
}
