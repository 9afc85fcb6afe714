//! Router configuration

use super::*;
use crate::core::router::{LoadBalancerConfig, RoutingPolicy, RoutingStrategy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Strategy active at startup
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Availability probe bound in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Budget for a whole request in milliseconds, unbounded when unset
    #[serde(default)]
    pub request_budget_ms: Option<u64>,
    /// Intelligent/fallback preferences
    #[serde(default)]
    pub policy: RoutingPolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            probe_timeout_ms: default_probe_timeout_ms(),
            request_budget_ms: None,
            policy: RoutingPolicy::default(),
        }
    }
}

impl RouterConfig {
    /// Parsed startup strategy
    pub fn routing_strategy(&self) -> Result<RoutingStrategy, String> {
        self.strategy.parse().map_err(|e| format!("{}", e))
    }

    /// Settings handed to the load balancer
    pub fn load_balancer_config(&self) -> Result<LoadBalancerConfig, String> {
        Ok(LoadBalancerConfig {
            strategy: self.routing_strategy()?,
            policy: self.policy.clone(),
            probe_timeout: Duration::from_millis(self.probe_timeout_ms),
            request_budget: self.request_budget_ms.map(Duration::from_millis),
        })
    }
}
