//! Server startup

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Create the server from loaded configuration and run until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting roast gateway v{}", env!("CARGO_PKG_VERSION"));

    let server = HttpServer::new(&config)?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("Uploads stored in: {}", config.upload.dir.display());
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/roast - Roast an uploaded photo");

    server.start().await
}
