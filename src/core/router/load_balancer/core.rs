//! Core LoadBalancer struct and strategy management

use crate::core::providers::ProviderRegistry;
use crate::core::router::config::{LoadBalancerConfig, RoutingPolicy};
use crate::core::router::error::RouterError;
use crate::core::router::strategy::{RoutePlan, RoutingStrategy, StrategyExecutor};
use crate::core::types::Message;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Routes generation requests across the registered providers
///
/// The registry is fixed at construction. The active strategy and the
/// round-robin cursor are the only mutable state, and both are safe to touch
/// from concurrent requests.
#[derive(Debug)]
pub struct LoadBalancer {
    pub(crate) registry: ProviderRegistry,
    /// Registered names, cached in registration order
    pub(crate) provider_names: Vec<String>,
    pub(crate) strategy: RwLock<RoutingStrategy>,
    pub(crate) executor: StrategyExecutor,
    pub(crate) probe_timeout: Duration,
    pub(crate) request_budget: Option<Duration>,
}

impl LoadBalancer {
    /// Create a new load balancer
    pub fn new(registry: ProviderRegistry, config: LoadBalancerConfig) -> Self {
        let provider_names = registry.names();

        info!(
            strategy = %config.strategy,
            providers = ?provider_names,
            "Creating load balancer"
        );
        if provider_names.is_empty() {
            warn!("Load balancer created with no providers; every request will fail");
        }
        for name in [&config.policy.heavy_provider, &config.policy.light_provider]
            .into_iter()
            .chain(config.policy.fallback_order.iter())
        {
            if !registry.contains(name) {
                warn!(provider = %name, "Routing policy names an unregistered provider");
            }
        }

        Self {
            registry,
            provider_names,
            strategy: RwLock::new(config.strategy),
            executor: StrategyExecutor::new(config.policy),
            probe_timeout: config.probe_timeout,
            request_budget: config.request_budget,
        }
    }

    /// Create a load balancer with the default policy and intelligent routing
    pub fn with_defaults(registry: ProviderRegistry) -> Self {
        Self::new(registry, LoadBalancerConfig::default())
    }

    /// Switch the active strategy by name.
    ///
    /// Unknown names leave the current strategy untouched.
    pub fn set_strategy(&self, name: &str) -> Result<RoutingStrategy, RouterError> {
        let strategy: RoutingStrategy = name.parse()?;
        self.set_routing_strategy(strategy);
        Ok(strategy)
    }

    /// Switch the active strategy
    pub fn set_routing_strategy(&self, strategy: RoutingStrategy) {
        let previous = std::mem::replace(&mut *self.strategy.write(), strategy);
        info!(from = %previous, to = %strategy, "Routing strategy changed");
    }

    /// Currently active strategy
    pub fn strategy(&self) -> RoutingStrategy {
        *self.strategy.read()
    }

    /// Snapshot for diagnostics; has no side effects
    pub fn get_provider_stats(&self) -> ProviderStats {
        ProviderStats {
            strategy: self.strategy(),
            available_providers: self.provider_names.clone(),
            current_index: self.executor.current_index(),
        }
    }

    /// Candidate order the active strategy would produce for `messages`.
    ///
    /// Under round-robin this advances the cursor, same as a real request.
    pub fn plan(&self, messages: &[Message]) -> RoutePlan {
        self.executor.plan(self.strategy(), &self.provider_names, messages)
    }

    /// Registered providers
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Routing policy
    pub fn policy(&self) -> &RoutingPolicy {
        self.executor.policy()
    }
}

/// Load balancer statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStats {
    /// Active strategy
    pub strategy: RoutingStrategy,
    /// Registered provider names, in registration order
    pub available_providers: Vec<String>,
    /// Round-robin cursor
    pub current_index: usize,
}
