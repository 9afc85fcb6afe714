//! Router configuration types
//!
//! The intelligent strategy's keyword list and length threshold, and the
//! fallback priority list, are tuned constants. They live here as policy so
//! deployments can change them without touching the strategies.

use super::strategy::RoutingStrategy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provider preferences used by the intelligent and fallback strategies
///
/// ## Defaults
///
/// - `heavy_provider`: openrouter
/// - `light_provider`: gemini
/// - `complexity_keywords`: draft, complex, detailed, comprehensive
/// - `length_threshold`: 500 characters
/// - `fallback_order`: gemini, openrouter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingPolicy {
    /// Provider preferred for complex or long requests
    pub heavy_provider: String,
    /// Provider preferred for everything else
    pub light_provider: String,
    /// Lower-case substrings that mark a request as complex
    pub complexity_keywords: Vec<String>,
    /// Character count at or above which a request is complex
    pub length_threshold: usize,
    /// Static priority list for the fallback strategy
    pub fallback_order: Vec<String>,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            heavy_provider: "openrouter".to_string(),
            light_provider: "gemini".to_string(),
            complexity_keywords: ["draft", "complex", "detailed", "comprehensive"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            length_threshold: 500,
            fallback_order: vec!["gemini".to_string(), "openrouter".to_string()],
        }
    }
}

impl RoutingPolicy {
    /// Whether a message should go to the heavy provider.
    ///
    /// Keyword match and length threshold are OR'd.
    pub fn is_complex(&self, message: &str) -> bool {
        if message.chars().count() >= self.length_threshold {
            return true;
        }
        let lower = message.to_lowercase();
        self.complexity_keywords
            .iter()
            .any(|keyword| lower.contains(keyword.to_lowercase().as_str()))
    }

    /// Validate the policy
    pub fn validate(&self) -> Result<(), String> {
        if self.heavy_provider.is_empty() || self.light_provider.is_empty() {
            return Err("heavy_provider and light_provider must be set".to_string());
        }
        if self.heavy_provider == self.light_provider {
            return Err("heavy_provider and light_provider must differ".to_string());
        }
        if self.length_threshold == 0 {
            return Err("length_threshold must be greater than 0".to_string());
        }
        if self.complexity_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err("complexity_keywords must not contain empty entries".to_string());
        }
        if self.fallback_order.is_empty() {
            return Err("fallback_order must list at least one provider".to_string());
        }
        Ok(())
    }
}

/// Load balancer configuration
#[derive(Debug, Clone)]
pub struct LoadBalancerConfig {
    /// Strategy active at startup
    pub strategy: RoutingStrategy,
    /// Intelligent/fallback preferences
    pub policy: RoutingPolicy,
    /// Upper bound on a single availability probe
    pub probe_timeout: Duration,
    /// Optional budget for the whole candidate loop of one request
    pub request_budget: Option<Duration>,
}

impl Default for LoadBalancerConfig {
    fn default() -> Self {
        Self {
            strategy: RoutingStrategy::default(),
            policy: RoutingPolicy::default(),
            probe_timeout: Duration::from_millis(5000),
            request_budget: None,
        }
    }
}
