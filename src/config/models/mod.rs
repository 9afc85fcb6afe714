//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod gateway;
pub mod logging;
pub mod provider;
pub mod router;
pub mod server;

// Re-export all configuration types
pub use gateway::*;
pub use logging::*;
pub use provider::*;
pub use router::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3001
}

/// Default upstream request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default strategy name
pub fn default_strategy() -> String {
    "intelligent".to_string()
}

/// Default availability probe bound in milliseconds
pub fn default_probe_timeout_ms() -> u64 {
    5000
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
