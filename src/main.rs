mod server;

use tower_http::trace::TraceLayer;
use tower_sessions::{ExpiredDeletion, MemoryStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{bot, config::Config, router, startup, state::AppState};

/// How often the persistent store is swept for expired sessions.
const EXPIRED_SESSION_SWEEP_INTERVAL: std::time::Duration =
    std::time::Duration::from_secs(3600);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatehouse=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let session_key = config.session_key()?;

    let state = AppState::new(http_client, oauth_client);

    // The bot is a fully independent network session; it shares only the
    // process configuration with the web subsystem.
    if let Some(token) = config.discord_bot_token.clone() {
        let bot_client = bot::start::init_bot(&token).await?;

        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(bot_client).await {
                tracing::error!("Discord bot error: {}", e);
            }
        });
    }

    // Sessions persist in SQLite when a database is configured, otherwise
    // they live in memory and die with the process.
    let app = match &config.database_url {
        Some(database_url) => {
            let store = startup::connect_to_session_store(database_url).await?;

            let sweeper_store = store.clone();
            tokio::spawn(async move {
                if let Err(e) = sweeper_store
                    .continuously_delete_expired(EXPIRED_SESSION_SWEEP_INTERVAL)
                    .await
                {
                    tracing::error!("Expired session sweeper error: {}", e);
                }
            });

            router::router().with_state(state).layer(startup::session_layer(
                store,
                session_key,
                config.secure_cookies(),
            ))
        }
        None => {
            tracing::info!("No DATABASE_URL configured, using in-memory session store");

            router::router().with_state(state).layer(startup::session_layer(
                MemoryStore::default(),
                session_key,
                config.secure_cookies(),
            ))
        }
    }
    .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.app_host, config.app_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
