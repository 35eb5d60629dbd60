use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every handler error ends up here and is answered as `400 {"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("messages must not be empty")]
    EmptyMessages,

    #[error("streaming unsupported")]
    StreamingUnsupported,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::warn!("[Error] {}", message);
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
    }
}
