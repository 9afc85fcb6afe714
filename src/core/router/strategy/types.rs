//! Routing strategy types and definitions

use crate::core::router::error::RouterError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Routing strategies for provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingStrategy {
    /// Rotate the starting provider on every request
    RoundRobin,
    /// Pick heavy or light provider from the last user message
    #[default]
    Intelligent,
    /// Static priority list, skipping providers whose probe fails
    Fallback,
}

impl RoutingStrategy {
    /// Every strategy, in display order
    pub const ALL: [RoutingStrategy; 3] = [
        RoutingStrategy::RoundRobin,
        RoutingStrategy::Intelligent,
        RoutingStrategy::Fallback,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingStrategy::RoundRobin => "round-robin",
            RoutingStrategy::Intelligent => "intelligent",
            RoutingStrategy::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for RoutingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutingStrategy {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| RouterError::InvalidStrategy(s.to_string()))
    }
}

/// Ordered candidate list computed for a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    /// Strategy that produced this plan
    pub strategy: RoutingStrategy,
    /// Provider names to try, in order, each at most once
    pub candidates: Vec<String>,
    /// Probe each candidate before calling it
    pub probe_first: bool,
}

impl RoutePlan {
    /// Whether there is anything to try
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
