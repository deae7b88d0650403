use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::server::{
    controller::auth::{callback, login, logout},
    controller::page::index,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/auth/discord", get(login))
        .route("/auth/discord/callback", get(callback))
        .route("/logout", get(logout))
        .fallback_service(ServeDir::new("public"))
}
