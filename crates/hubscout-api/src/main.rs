use std::sync::Arc;

use tracing::info;

use hubscout_api::logging::init_tracing;
use hubscout_api::{build_router, AppState, ServerConfig};
use hubscout_hub::HubClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let _log_guard = init_tracing();

    let config = ServerConfig::from_env()?;
    let hub = HubClient::from_env()?;
    info!(
        hub_url = %hub.config().base_url,
        origins = config.allowed_origins.len(),
        "Configuration loaded"
    );

    let addr = config.bind_addr()?;
    let app = build_router(AppState::new(Arc::new(hub)), config.allowed_origins);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
