//! Router configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for RouterConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating router configuration");

        self.routing_strategy()?;

        if self.probe_timeout_ms == 0 {
            return Err("Router probe timeout must be greater than 0".to_string());
        }

        if self.request_budget_ms == Some(0) {
            return Err("Router request budget must be greater than 0 when set".to_string());
        }

        if self.policy.complexity_keywords.is_empty() {
            return Err("Router complexity keywords cannot be empty".to_string());
        }

        self.policy
            .validate()
            .map_err(|e| format!("Router policy: {}", e))
    }
}
