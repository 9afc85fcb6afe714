//! Router error types
//!
//! Only these two failures cross the load balancer boundary. Individual
//! provider failures stay inside the candidate loop and are only logged.

use super::strategy::RoutingStrategy;

/// Router error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// Requested strategy name is not one of the known strategies
    #[error("Invalid strategy: {0} (expected one of round-robin, intelligent, fallback)")]
    InvalidStrategy(String),

    /// Every candidate in the computed order failed or was unavailable
    #[error("All providers failed under {strategy} strategy ({candidates} candidates)")]
    AllProvidersFailed {
        /// Strategy that produced the candidate order
        strategy: RoutingStrategy,
        /// Number of candidates in the order
        candidates: usize,
    },
}

impl RouterError {
    /// Create an aggregate failure
    pub fn all_providers_failed(strategy: RoutingStrategy, candidates: usize) -> Self {
        Self::AllProvidersFailed {
            strategy,
            candidates,
        }
    }
}
