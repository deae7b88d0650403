use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The provider answered the callback with an error parameter instead of
    /// an authorization code, for example when the user denied consent.
    #[error("Discord returned an error on the OAuth callback: {0}")]
    ProviderError(String),

    /// The callback request carried no authorization code.
    #[error("OAuth callback was invoked without an authorization code")]
    MissingAuthorizationCode,

    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The state token in the callback URL does not match the single-use token
    /// stored in the session when the flow started.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code with Discord: {0}")]
    TokenExchangeFailed(String),

    /// Fetching the user profile with the access token failed.
    #[error("Failed to fetch Discord profile: {0}")]
    ProfileFetchFailed(#[from] reqwest::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Every auth failure funnels to the same redirect back to the site root with
/// no identity stored, matching the configured failure path. The underlying
/// cause is logged at warn level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("login failed, redirecting to root: {self}");
        Redirect::to("/").into_response()
    }
}
