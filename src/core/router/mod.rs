//! Core router for AI provider selection and failover
//!
//! ## Module Structure
//!
//! - `config` - Routing policy and load balancer settings
//! - `error` - Errors that cross the load balancer boundary
//! - `strategy` - Strategy names and candidate ordering
//! - `load_balancer` - Sequential execution with failover

pub mod config;
pub mod error;
pub mod load_balancer;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use config::{LoadBalancerConfig, RoutingPolicy};
pub use error::RouterError;
pub use load_balancer::{LoadBalancer, ProviderStats};
pub use strategy::{RoutePlan, RoutingStrategy, StrategyExecutor};
