//! Ready event handler for bot initialization.
//!
//! The `ready` event fires when the bot completes the gateway handshake and is
//! the only event this bot cares about: it exists to hold the connection open
//! and report that it is alive.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
}
