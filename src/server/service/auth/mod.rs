//! OAuth2 login with Discord.
//!
//! `DiscordAuthService` owns the two halves of the authorization-code flow:
//! producing the provider authorization URL (`login.rs`) and resolving a
//! callback code into an `Identity` (`callback.rs`).

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;

pub struct DiscordAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }
}
