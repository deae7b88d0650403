//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse` so
//! handlers can propagate failures with `?`.
//!
//! Authentication and session failures never surface internal detail to the
//! browser: they all funnel to a redirect back to the site root, with the real
//! cause logged server-side.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application. Most variants
/// use `#[from]` for automatic conversion. `AuthError` handles its own response
/// mapping; everything else degrades to a generic response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Fatal: surfaces before the server
    /// binds, never as an HTTP response.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error. Delegates to `AuthError::into_response()`, which
    /// redirects to the site root.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Session store operation error. Funnels to the same root redirect as
    /// auth failures so a broken store never strands the browser on an error
    /// page mid-login.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// SQLx error from the persistent session store.
    #[error(transparent)]
    SqlxErr(#[from] sqlx::Error),

    /// HTTP client error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord gateway error from Serenity. Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Boxes serenity errors to keep the enum small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// Auth and session errors redirect to `/`; remaining errors are logged with
/// full detail and answered with a generic 500 to avoid leaking internals.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::SessionErr(err) => {
                tracing::warn!("session operation failed, redirecting to root: {err}");
                Redirect::to("/").into_response()
            }
            err => {
                tracing::error!("{err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
