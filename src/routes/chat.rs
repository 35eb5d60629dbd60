use crate::{
    app_state::AppState,
    assembler::{assemble_completion, decode_request},
    error::ApiError,
    utils::ChatResponse,
};
use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

pub async fn chat_completions(
    State(app): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let req = decode_request(&body)?;
    let id = app.ids.next_id().await;
    let res = assemble_completion(id, &app.env.model_name, &req, app.tokens.as_ref())?;
    Ok(Json(res))
}
