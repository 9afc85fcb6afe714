//! Load balancer over the registered providers
//!
//! Computes a candidate order with the active strategy, then calls providers
//! one at a time until one succeeds.

mod core;
mod execution;

pub use self::core::{LoadBalancer, ProviderStats};
