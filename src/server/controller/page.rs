use axum::response::Html;
use tower_sessions::Session;

use crate::server::{middleware::session::AuthSession, view};

/// `GET /` - renders the landing page.
///
/// Reads the identity from the session; a missing identity or an unreachable
/// session store both render the anonymous view. This route performs no
/// mutation.
pub async fn index(session: Session) -> Html<String> {
    let identity = AuthSession::new(&session).identity_or_anonymous().await;

    Html(view::render_index(identity.as_ref()))
}
