use crate::{app_state::AppState, routes::create_router};
use eyre::Result;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Serves until `app.shutdown` is cancelled, then drains open connections.
pub async fn serve(app: Arc<AppState>, listener: TcpListener) -> Result<()> {
    let shutdown = app.shutdown.clone();
    let router = create_router(app);

    tracing::info!("API server listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("API server stopped");
    Ok(())
}
