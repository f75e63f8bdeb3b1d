use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use ragserve::config::AppConfig;
use ragserve::logging;
use ragserve::server::router::router;
use ragserve::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::init(config.log_dir.as_deref());

    let bind_addr = config.bind_addr.clone();
    let state = AppState::initialize(config).await?;

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!("Listening on {}", addr);

    let app: Router = router(state);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
