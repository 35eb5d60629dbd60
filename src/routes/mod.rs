mod chat;
mod chat_streaming;
mod ping;

pub use chat::chat_completions;
pub use chat_streaming::chat_completions_streaming;
pub use ping::ping;

use crate::{app_state::AppState, middlewares::log_request};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn create_router(app: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/chat/completions", post(chat_completions))
        .route(
            "/chat/completions/streaming",
            post(chat_completions_streaming),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(log_request))
        .with_state(app)
}
