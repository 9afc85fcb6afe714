//! Configuration loading and the run_server entry point

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// Load `path`, or fall back to defaults plus environment when it does not exist.
///
/// A file that exists but fails to parse or validate is an error.
pub async fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if tokio::fs::try_exists(path).await? {
        return Config::from_file(path).await;
    }

    warn!(
        "Configuration file {:?} not found, using defaults and environment",
        path
    );
    Config::from_env()
}

/// Build the server from `config` and run it until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting legal AI gateway");

    let server = HttpServer::new(&config)?;
    let stats = server.state().load_balancer.get_provider_stats();
    if stats.available_providers.is_empty() {
        warn!("No providers registered; chat requests will receive fallback replies");
    }

    info!(
        strategy = %stats.strategy,
        providers = ?stats.available_providers,
        "Server starting at: http://{}",
        config.server().address()
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/ai/config - Routing stats");
    info!("   POST /api/ai/config - Switch routing strategy");
    info!("   POST /api/ai/chat - Chat through the load balancer");

    server.start().await
}
