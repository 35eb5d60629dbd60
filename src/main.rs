use mock_chat_api::{serve, AppState, Env};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt::init();

    let env = Env::new()?;
    let listener = TcpListener::bind(env.listen_addr).await?;
    let app = Arc::new(AppState::new(env));

    let shutdown = app.shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                shutdown.cancel();
            }
            Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
        }
    });

    serve(app, listener).await
}
