//! Routing strategies for provider selection
//!
//! A strategy only orders candidates. Calling them, skipping unavailable ones
//! and aggregating failures is the load balancer's job.

mod executor;
mod types;

pub use executor::StrategyExecutor;
pub use types::{RoutePlan, RoutingStrategy};
