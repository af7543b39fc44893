use tessera_core::{
    ActivityAssets, DiscordUser, PresenceActivity, PresenceData, PresenceStatus, SpotifyTrack,
};

fn user(id: &str) -> DiscordUser {
    DiscordUser {
        id: id.to_string(),
        username: "ferris".to_string(),
        global_name: Some("Ferris".to_string()),
        avatar: None,
        discriminator: "0".to_string(),
    }
}

fn custom_status() -> PresenceActivity {
    PresenceActivity {
        name: "Custom Status".to_string(),
        kind: PresenceActivity::CUSTOM_STATUS,
        state: Some("shipping".to_string()),
        ..PresenceActivity::default()
    }
}

pub fn by_user(id: &str) -> Option<PresenceData> {
    let data = match id {
        "MISSING" => return None,
        "listening" => PresenceData {
            discord_user: user(id),
            discord_status: PresenceStatus::Online,
            activities: vec![custom_status()],
            listening_to_spotify: true,
            spotify: Some(SpotifyTrack {
                song: "Crab Rave".to_string(),
                artist: "Noisestorm".to_string(),
                album_art_url: Some("https://i.scdn.co/image/ab67616d0000b273".to_string()),
            }),
        },
        "playing" => PresenceData {
            discord_user: user(id),
            discord_status: PresenceStatus::Dnd,
            activities: vec![
                custom_status(),
                PresenceActivity {
                    name: "Factorio".to_string(),
                    kind: 0,
                    details: Some("Launching rockets".to_string()),
                    state: Some("Space Age".to_string()),
                    assets: Some(ActivityAssets {
                        large_image: Some("factorio".to_string()),
                        small_image: None,
                    }),
                },
            ],
            ..PresenceData::default()
        },
        "offline" => PresenceData {
            discord_user: user(id),
            ..PresenceData::default()
        },
        _ => PresenceData {
            discord_user: user(id),
            discord_status: PresenceStatus::Idle,
            activities: vec![custom_status()],
            ..PresenceData::default()
        },
    };
    Some(data)
}
