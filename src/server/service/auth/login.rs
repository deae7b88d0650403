use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::DiscordAuthService;

/// The only scope the gateway ever requests: no email, no guild data.
const OAUTH_SCOPE_IDENTIFY: &str = "identify";

impl<'a> DiscordAuthService<'a> {
    /// Produces the provider authorization URL for the login redirect, along
    /// with the CSRF state token to stash in the session for callback
    /// validation.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(OAUTH_SCOPE_IDENTIFY.to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
