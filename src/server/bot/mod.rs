//! Optional Discord gateway bot.
//!
//! The bot is an independent network session: it shares nothing with the web
//! subsystem except the process configuration it was started from. Serenity
//! owns its connect/retry lifecycle.

pub mod handler;
pub mod start;
