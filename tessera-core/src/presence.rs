//! Presence card view model derived from a raw presence snapshot.

use serde::Serialize;
use tessera_types::{DiscordUser, PresenceData, PresenceStatus};

const AVATAR_CDN: &str = "https://cdn.discordapp.com";
const PROFILE_BASE: &str = "https://discord.com/users";

/// Label shown above the activity name while a track is playing.
pub const LISTENING_LABEL: &str = "Listening to Spotify";
/// Label shown above the activity name for any other activity.
pub const PLAYING_LABEL: &str = "Playing";

/// Indicator colour for a status.
#[must_use]
pub const fn status_color(status: PresenceStatus) -> &'static str {
    match status {
        PresenceStatus::Online => "#23a55a",
        PresenceStatus::Idle => "#f0b232",
        PresenceStatus::Dnd => "#f23f43",
        PresenceStatus::Offline => "#80848e",
    }
}

/// Avatar image URL, falling back to the default embed avatar.
#[must_use]
pub fn avatar_url(user: &DiscordUser) -> String {
    match user.avatar.as_deref().filter(|a| !a.is_empty()) {
        Some(hash) => format!("{AVATAR_CDN}/avatars/{}/{hash}.png?size=64", user.id),
        None => {
            let slot = user.discriminator.trim().parse::<u64>().unwrap_or(0) % 5;
            format!("{AVATAR_CDN}/embed/avatars/{slot}.png")
        }
    }
}

/// Public profile link for a user id.
#[must_use]
pub fn profile_url(user_id: &str) -> String {
    format!("{PROFILE_BASE}/{user_id}")
}

/// Everything a compact presence card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceSummary {
    /// Online status.
    pub status: PresenceStatus,
    /// Indicator colour for `status`.
    pub status_color: &'static str,
    /// "Listening to Spotify", "Playing", or nothing when idle.
    pub activity_label: Option<&'static str>,
    /// Track title or activity name.
    pub activity_name: Option<String>,
    /// Artist line or activity state.
    pub activity_details: Option<String>,
    /// Album art while listening.
    pub image_url: Option<String>,
    /// Avatar used when there is no activity image.
    pub avatar_url: String,
    /// Display name, preferring the global name.
    pub display_name: String,
    /// Link to the public profile.
    pub profile_url: String,
}

impl PresenceSummary {
    /// Build the card model for a snapshot.
    ///
    /// A playing track takes precedence over every other activity. Otherwise
    /// the first activity that is not a custom status is shown.
    #[must_use]
    pub fn from_data(data: &PresenceData) -> Self {
        let user = &data.discord_user;
        let track = data.spotify.as_ref().filter(|_| data.listening_to_spotify);

        let (activity_label, activity_name, activity_details, image_url) = match track {
            Some(track) => (
                Some(LISTENING_LABEL),
                Some(track.song.clone()),
                Some(format!("by {}", track.artist)),
                track.album_art_url.clone(),
            ),
            None => match data.activities.iter().find(|a| !a.is_custom_status()) {
                Some(activity) => (
                    Some(PLAYING_LABEL),
                    activity
                        .details
                        .clone()
                        .filter(|d| !d.is_empty())
                        .or_else(|| Some(activity.name.clone())),
                    activity.state.clone(),
                    None,
                ),
                None => (None, None, None, None),
            },
        };

        Self {
            status: data.discord_status,
            status_color: status_color(data.discord_status),
            activity_label,
            activity_name,
            activity_details,
            image_url,
            avatar_url: avatar_url(user),
            display_name: user
                .global_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| user.username.clone()),
            profile_url: profile_url(&user.id),
        }
    }

    /// Top line of the card: the activity label, else the status.
    #[must_use]
    pub fn headline(&self) -> &str {
        self.activity_label.unwrap_or_else(|| self.status.as_str())
    }

    /// Hover title: the activity name, else "Discord: <status>".
    #[must_use]
    pub fn title(&self) -> String {
        self.activity_name
            .clone()
            .unwrap_or_else(|| format!("Discord: {}", self.status))
    }
}
