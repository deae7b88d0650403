use tower_sessions::cookie::Key;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Cookie signing keys must be at least 64 bytes of entropy.
const MIN_SESSION_SECRET_BYTES: usize = 64;

pub struct Config {
    pub discord_client_id: String,
    pub discord_client_secret: String,
    /// Must exactly match the redirect URL registered with Discord.
    pub discord_redirect_url: String,
    pub session_secret: String,

    /// Optional SQLite connection string; sessions live in memory when unset.
    pub database_url: Option<String>,
    /// Optional bot token; no gateway connection is made when unset.
    pub discord_bot_token: Option<String>,

    pub app_host: String,
    pub app_port: u16,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_secret = require_env("SESSION_SECRET")?;
        if session_secret.len() < MIN_SESSION_SECRET_BYTES {
            return Err(ConfigError::WeakSessionSecret.into());
        }

        let app_port = match std::env::var("APP_PORT") {
            Ok(port) => port.parse::<u16>().map_err(|err| ConfigError::InvalidEnvVar {
                name: "APP_PORT".to_string(),
                reason: err.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            discord_client_id: require_env("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_env("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require_env("DISCORD_REDIRECT_URL")?,
            session_secret,
            database_url: std::env::var("DATABASE_URL").ok(),
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN").ok(),
            app_host: std::env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            app_port,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }

    /// Derives the cookie signing key from the configured session secret.
    pub fn session_key(&self) -> Result<Key, AppError> {
        Key::try_from(self.session_secret.as_bytes())
            .map_err(|_| ConfigError::WeakSessionSecret.into())
    }

    /// Session cookies are marked `Secure` whenever the registered redirect
    /// URL is served over https, which is the case everywhere but local
    /// development.
    pub fn secure_cookies(&self) -> bool {
        self.discord_redirect_url.starts_with("https://")
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}
