use serenity::all::{Client, Context, EventHandler, GatewayIntents, Ready};
use serenity::async_trait;

use crate::server::bot::handler;
use crate::server::error::AppError;

/// Discord bot event handler
struct Handler;

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        handler::ready::handle_ready(ctx, ready).await;
    }
}

/// Builds the Discord bot client.
///
/// The bot listens for nothing beyond the gateway handshake, so no intents are
/// requested.
///
/// # Arguments
/// - `token` - Bot token from configuration
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Bot initialization failed
pub async fn init_bot(token: &str) -> Result<Client, AppError> {
    let intents = GatewayIntents::empty();

    let client = Client::builder(token, intents)
        .event_handler(Handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner.
///
/// Blocks until the bot shuts down, so it should be called from within a
/// spawned task. Serenity reconnects on transient gateway failures.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    client.start().await?;

    Ok(())
}
