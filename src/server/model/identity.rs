use serde::{Deserialize, Serialize};

/// Base URL for user avatars on the Discord CDN.
const AVATAR_CDN_BASE: &str = "https://cdn.discordapp.com/avatars";

/// Default avatar shown for accounts that never uploaded one.
const DEFAULT_AVATAR_URL: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

/// The identity of a logged-in user, as resolved from the Discord profile at
/// login time.
///
/// Created once during the OAuth callback, stored as-is in the session, and
/// read back as-is on every request. It is never persisted anywhere else and
/// disappears with the session on logout or expiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Discord user ID (snowflake, provider-scoped).
    pub id: String,
    /// Discord username at the time of login.
    pub username: String,
    /// Fully constructed CDN URL for the user's avatar.
    pub avatar_url: String,
}

/// The subset of the Discord `/users/@me` response the gateway cares about.
///
/// The `identify` scope grants exactly this: no email, no guild data.
#[derive(Debug, Deserialize)]
pub struct DiscordProfile {
    pub id: String,
    pub username: String,
    /// Avatar hash; `None` for accounts using a default avatar.
    pub avatar: Option<String>,
}

impl From<DiscordProfile> for Identity {
    fn from(profile: DiscordProfile) -> Self {
        let avatar_url = match &profile.avatar {
            Some(hash) => format!("{}/{}/{}.png", AVATAR_CDN_BASE, profile.id, hash),
            None => DEFAULT_AVATAR_URL.to_string(),
        };

        Self {
            id: profile.id,
            username: profile.username,
            avatar_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies the avatar URL is built from the fixed CDN template keyed by
    /// user id and avatar hash.
    #[test]
    fn maps_profile_to_identity() {
        let profile = DiscordProfile {
            id: "123".to_string(),
            username: "alice".to_string(),
            avatar: Some("abc".to_string()),
        };

        let identity = Identity::from(profile);

        assert_eq!(identity.id, "123");
        assert_eq!(identity.username, "alice");
        assert_eq!(
            identity.avatar_url,
            "https://cdn.discordapp.com/avatars/123/abc.png"
        );
    }

    /// Accounts without an uploaded avatar fall back to the default CDN asset
    /// rather than producing a dead `.../null.png` link.
    #[test]
    fn missing_avatar_hash_uses_default_avatar() {
        let profile = DiscordProfile {
            id: "123".to_string(),
            username: "alice".to_string(),
            avatar: None,
        };

        let identity = Identity::from(profile);

        assert_eq!(
            identity.avatar_url,
            "https://cdn.discordapp.com/embed/avatars/0.png"
        );
    }

    /// The identity survives a serialize/deserialize cycle unchanged, which is
    /// what the session store does between login and the next page load.
    #[test]
    fn identity_round_trips_through_serde() {
        let identity = Identity {
            id: "42".to_string(),
            username: "bob".to_string(),
            avatar_url: "https://cdn.discordapp.com/avatars/42/def.png".to_string(),
        };

        let json = serde_json::to_string(&identity).unwrap();
        let restored: Identity = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, identity);
    }

    /// Unknown provider fields are ignored when deserializing the profile.
    #[test]
    fn profile_deserialization_ignores_extra_fields() {
        let json = r#"{
            "id": "123",
            "username": "alice",
            "avatar": "abc",
            "discriminator": "0",
            "global_name": "Alice"
        }"#;

        let profile: DiscordProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "123");
        assert_eq!(profile.avatar.as_deref(), Some("abc"));
    }
}
