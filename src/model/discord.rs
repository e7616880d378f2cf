use serde::{Deserialize, Deserializer, Serialize};

/// Permission bit granting administrative control over a guild.
pub const MANAGE_GUILD: u64 = 1 << 5;

/// Subset of the Discord user profile the dashboard caches in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One entry of the `/users/@me/guilds` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGuild {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    #[serde(default, deserialize_with = "permissions_bitmask")]
    pub permissions: u64,
}

impl UserGuild {
    /// Whether the user holds Manage Guild in this guild.
    pub fn can_manage(&self) -> bool {
        self.permissions & MANAGE_GUILD != 0
    }
}

/// Deserializes Discord's permission bitmask.
///
/// Discord serializes `permissions` as a decimal string since bitmasks
/// outgrew 53-bit JSON numbers, but older payloads carry a plain integer.
/// Accept both.
fn permissions_bitmask<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Str(value) => value.parse::<u64>().map_err(serde::de::Error::custom),
    }
}
