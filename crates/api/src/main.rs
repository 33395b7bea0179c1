//! Smart Energy Forecast Service - Main Entry Point

use forecast_api::{init_logging, run_server, ServiceConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Smart Energy Forecast v{} ===", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::load()?;
    run_server(config).await
}
