//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for the two concerns the gateway
//! keeps in a session, preventing key typos and centralizing session-related
//! logic:
//!
//! - `AuthSession` - the logged-in identity and session lifecycle
//! - `CsrfSession` - the single-use CSRF state token for the OAuth flow
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.
//!
//! The identity is stored as-is and read back as-is. Serde already guarantees
//! the shape on read; no further validation happens, matching the gateway's
//! trust-what-was-stored session contract.

use tower_sessions::Session;

use crate::server::{error::AppError, model::identity::Identity};

// Session key constants
const SESSION_AUTH_IDENTITY: &str = "auth:identity";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Handles the authenticated identity stored in the session and the session
/// lifecycle operations used by login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the resolved identity in the session.
    ///
    /// Called exactly once per login, after a successful OAuth callback. This
    /// write is load-bearing: if it fails the login must not appear to
    /// succeed, so the error propagates instead of being swallowed.
    ///
    /// # Returns
    /// - `Ok(())` - Identity recorded, session is now authenticated
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_identity(&self, identity: &Identity) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_IDENTITY, identity).await?;
        Ok(())
    }

    /// Retrieves the identity from the session, if any.
    ///
    /// # Returns
    /// - `Ok(Some(identity))` - User is logged in
    /// - `Ok(None)` - Anonymous session (or no session at all)
    /// - `Err(AppError::SessionErr(_))` - Failed to access the session store
    pub async fn identity(&self) -> Result<Option<Identity>, AppError> {
        let identity = self.session.get::<Identity>(SESSION_AUTH_IDENTITY).await?;
        Ok(identity)
    }

    /// Retrieves the identity, degrading to anonymous if the store is
    /// unreachable.
    ///
    /// Read paths must not fail a request over a broken session store; the
    /// failure is logged and the request continues without an identity. The
    /// login callback uses `set_identity` instead, where a store failure is
    /// fatal to the request.
    pub async fn identity_or_anonymous(&self) -> Option<Identity> {
        match self.identity().await {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!("session lookup failed, continuing as anonymous: {err}");
                None
            }
        }
    }

    /// Checks whether an identity is stored in the session.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.identity().await?.is_some())
    }

    /// Destroys the session entirely.
    ///
    /// Used during logout. Removes the identity along with any leftover OAuth
    /// flow state and deletes the session record from the store. Calling this
    /// on an anonymous session is a no-op, which keeps logout idempotent.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// The token is stored when the OAuth flow starts and validated during the
/// callback. Tokens are single use: reading one removes it.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF state token generated for an outgoing provider
    /// redirect.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token was present and has been consumed
    /// - `Ok(None)` - No OAuth flow was started from this session
    /// - `Err(AppError::SessionErr(_))` - Failed to access the session store
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
