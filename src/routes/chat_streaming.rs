use crate::{
    app_state::AppState,
    assembler::{assemble_stream_head, decode_request},
    error::ApiError,
    utils::get_event_stream,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName},
    response::{sse::Sse, IntoResponse, Response},
};
use std::sync::Arc;

const X_ACCEL_BUFFERING: HeaderName = HeaderName::from_static("x-accel-buffering");

pub async fn chat_completions_streaming(
    State(app): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req = decode_request(&body)?;
    if !app.env.streaming_enabled {
        return Err(ApiError::StreamingUnsupported);
    }

    let id = app.ids.next_id().await;
    tracing::info!(
        "[Stream] {} - {} fragments every {:?}",
        id,
        app.env.stream_chunks,
        app.env.stream_interval
    );
    let head = assemble_stream_head(id, &app.env.model_name, &req, app.tokens.as_ref());
    let stream = get_event_stream(
        head,
        app.env.stream_chunks,
        app.env.stream_interval,
        app.shutdown.child_token(),
    );

    // Sse sets content-type and cache-control itself.
    let headers = [
        (header::CONNECTION, "keep-alive"),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (X_ACCEL_BUFFERING, "no"),
    ];
    Ok((headers, Sse::new(stream)).into_response())
}
