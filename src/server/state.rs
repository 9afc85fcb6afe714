//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::providers::build_registry;
use crate::core::router::LoadBalancer;
use crate::server::fallback::{FallbackResponder, StaticResponder};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for cheap cloning into each actix worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Provider load balancer, one per process
    pub load_balancer: Arc<LoadBalancer>,
    /// Replies used when every provider failed
    pub fallback: Arc<dyn FallbackResponder>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        load_balancer: LoadBalancer,
        fallback: Arc<dyn FallbackResponder>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            load_balancer: Arc::new(load_balancer),
            fallback,
        }
    }

    /// Build providers and the load balancer from configuration
    pub fn from_config(config: Config) -> Result<Self> {
        let registry = build_registry(config.providers())?;
        let lb_config = config
            .router()
            .load_balancer_config()
            .map_err(GatewayError::Config)?;
        let load_balancer = LoadBalancer::new(registry, lb_config);

        Ok(Self::new(
            config,
            load_balancer,
            Arc::new(StaticResponder::default()),
        ))
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
