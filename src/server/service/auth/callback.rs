use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::identity::{DiscordProfile, Identity},
    service::auth::DiscordAuthService,
};

const DISCORD_USER_PROFILE_URL: &str = "https://discord.com/api/users/@me";

impl<'a> DiscordAuthService<'a> {
    /// Completes the authorization-code exchange and resolves the identity.
    ///
    /// Exchanges the callback code for an access token, fetches the user's
    /// profile with it, and maps the profile to an `Identity`. The code and
    /// token live only for the duration of this call; nothing is persisted
    /// here. Any failure propagates so the caller can route the browser to
    /// the failure path with no partial identity stored.
    pub async fn callback(&self, authorization_code: String) -> Result<Identity, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| AuthError::TokenExchangeFailed(err.to_string()))?;

        let profile = self.fetch_discord_profile(&token).await?;

        Ok(Identity::from(profile))
    }

    /// Retrieves the Discord profile using the freshly exchanged access token.
    async fn fetch_discord_profile(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordProfile, AppError> {
        let access_token = token.access_token().secret();

        let profile = self
            .http_client
            .get(DISCORD_USER_PROFILE_URL)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(AuthError::ProfileFetchFailed)?
            .error_for_status()
            .map_err(AuthError::ProfileFetchFailed)?
            .json::<DiscordProfile>()
            .await
            .map_err(AuthError::ProfileFetchFailed)?;

        Ok(profile)
    }
}
