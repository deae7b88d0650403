//! Router-level tests for the gateway's HTTP surface.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot` with an
//! in-memory session layer. The OAuth client points at an unreachable token
//! endpoint so token exchanges fail the way a provider outage would, which is
//! exactly what the failure-path tests need.

use axum::{
    body::Body,
    extract::Query,
    http::{header, Request},
    response::Response,
    routing::get,
    Router,
};
use serde::Deserialize;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

use crate::server::{
    config::tests::test_config,
    middleware::session::AuthSession,
    model::identity::Identity,
    router::router,
    startup::{setup_oauth_client, setup_reqwest_client},
    state::AppState,
};

mod page;

/// Nothing listens here; exchanges against it fail like a provider outage.
const UNREACHABLE_TOKEN_URL: &str = "http://127.0.0.1:9/api/oauth2/token";

#[derive(Deserialize)]
struct SeedParams {
    id: String,
    username: String,
}

/// Test-only route that records an identity in the session, standing in for a
/// completed provider exchange.
async fn seed_identity(session: Session, Query(params): Query<SeedParams>) -> &'static str {
    let identity = Identity {
        avatar_url: format!(
            "https://cdn.discordapp.com/avatars/{}/abc.png",
            params.id
        ),
        id: params.id,
        username: params.username,
    };

    AuthSession::new(&session)
        .set_identity(&identity)
        .await
        .unwrap();

    "ok"
}

/// Builds the application with the production router, an in-memory session
/// layer, and the identity-seeding test route.
fn test_app() -> Router {
    let state = AppState::new(
        setup_reqwest_client().unwrap(),
        setup_oauth_client(&test_config(UNREACHABLE_TOKEN_URL)).unwrap(),
    );

    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .merge(router())
        .route("/test/login", get(seed_identity))
        .with_state(state)
        .layer(session_layer)
}

async fn get_path(app: &Router, path: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Extracts the session cookie pair from a response, if one was set.
fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|pair| pair.to_string())
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response has no Location header")
        .to_str()
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
