//! Construction of the long-lived components the server is built from: the
//! hardened HTTP client, the OAuth2 client, and the session store and layer.

use std::time::Duration;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sqlx::SqlitePool;
use time::Duration as SessionDuration;
use tower_sessions::{
    cookie::Key, service::SignedCookie, Expiry, SessionManagerLayer, SessionStore,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Sessions expire after 14 days of inactivity.
const SESSION_EXPIRY_DAYS: i64 = 14;

/// Upper bound on each outbound call to Discord during the OAuth exchange.
const HTTP_CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used for Discord API requests.
///
/// Redirects are disabled so a malicious or misbehaving provider response
/// cannot steer requests elsewhere, and every request carries a bounded
/// timeout so a stalled exchange fails the login instead of hanging the
/// callback.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_CLIENT_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the Discord authorization-code flow from the
/// configured endpoints and credentials.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(parse_endpoint_url(
            AuthUrl::new(config.discord_auth_url.clone()),
            "discord_auth_url",
        )?)
        .set_token_uri(parse_endpoint_url(
            TokenUrl::new(config.discord_token_url.clone()),
            "discord_token_url",
        )?)
        .set_redirect_uri(parse_endpoint_url(
            RedirectUrl::new(config.discord_redirect_url.clone()),
            "DISCORD_REDIRECT_URL",
        )?);

    Ok(client)
}

fn parse_endpoint_url<T>(
    parsed: Result<T, url::ParseError>,
    name: &str,
) -> Result<T, AppError> {
    parsed.map_err(|err| {
        ConfigError::InvalidUrl {
            name: name.to_string(),
            reason: err.to_string(),
        }
        .into()
    })
}

/// Connects to the SQLite session store and runs its schema migration.
///
/// Only called when `DATABASE_URL` is configured; without it, sessions live in
/// an in-memory store and die with the process.
pub async fn connect_to_session_store(database_url: &str) -> Result<SqliteStore, AppError> {
    let pool = SqlitePool::connect(database_url).await?;

    let store = SqliteStore::new(pool);
    store.migrate().await?;

    Ok(store)
}

/// Builds the session middleware layer over the given store.
///
/// Cookies are signed with the key derived from `SESSION_SECRET`; the browser
/// only ever holds the opaque session id. Sessions expire after 14 days of
/// inactivity.
pub fn session_layer<S: SessionStore>(
    store: S,
    key: Key,
    secure: bool,
) -> SessionManagerLayer<S, SignedCookie> {
    SessionManagerLayer::new(store)
        .with_secure(secure)
        .with_expiry(Expiry::OnInactivity(SessionDuration::days(
            SESSION_EXPIRY_DAYS,
        )))
        .with_signed(key)
}
