use axum::{extract::Request, middleware::Next, response::Response};

pub async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!("[{}] {}", req.method(), req.uri().path());
    next.run(req).await
}
