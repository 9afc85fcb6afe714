//! Logging configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Logging configuration
///
/// `RUST_LOG`, when set, takes precedence over `level`. Output format is
/// chosen on the command line since the subscriber is installed before the
/// file is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
