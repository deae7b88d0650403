//! Handlers for the three authentication routes.
//!
//! All failure modes funnel to a redirect back to `/` with no identity stored;
//! see `AuthError`'s response mapping.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{AuthSession, CsrfSession},
    service::auth::DiscordAuthService,
    state::AppState,
};

/// Query parameters Discord appends to the OAuth callback.
///
/// All fields are optional at the HTTP level: when the user denies consent the
/// provider sends `error` instead of `code`, and a forged request may omit
/// anything. Validation happens in the handler so every malformed shape takes
/// the failure redirect instead of a framework-level 400.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// Authorization code for the token exchange.
    pub code: Option<String>,
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Provider error code, set instead of `code` on denial.
    pub error: Option<String>,
}

/// `GET /auth/discord` - starts the login flow.
///
/// Stores the CSRF state token in the session and redirects the browser to
/// Discord's authorization endpoint with the `identify` scope.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Stashed for verification during the callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// `GET /auth/discord/callback` - completes the login flow.
///
/// Validates the CSRF state, exchanges the authorization code for the user's
/// identity, records it in the session, and sends the browser home. Errors
/// propagate to `AuthError`/`AppError` response mapping, which lands on the
/// same redirect with nothing stored.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, AppError> {
    if let Some(error) = params.error {
        return Err(AuthError::ProviderError(error).into());
    }

    let csrf_state = params.state.ok_or(AuthError::CsrfValidationFailed)?;
    validate_csrf(&session, &csrf_state).await?;

    let code = params.code.ok_or(AuthError::MissingAuthorizationCode)?;

    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);
    let identity = auth_service.callback(code).await?;

    // Load-bearing write: a login that is not persisted must not look
    // successful, so a store failure here takes the failure redirect.
    AuthSession::new(&session).set_identity(&identity).await?;

    tracing::info!(user_id = %identity.id, "user logged in");

    Ok(Redirect::to("/"))
}

/// `GET /logout` - destroys the session and redirects home.
///
/// Idempotent: logging out an anonymous session is not an error.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    AuthSession::new(&session).destroy().await?;

    Ok(Redirect::to("/"))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AuthError::CsrfValidationFailed.into())
}
