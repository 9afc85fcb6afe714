//! Request execution over a route plan

use super::core::LoadBalancer;
use crate::core::router::error::RouterError;
use crate::core::router::strategy::RoutePlan;
use crate::core::traits::ProviderAdapter;
use crate::core::types::{GenerationRequest, GenerationResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

impl LoadBalancer {
    /// Generate a completion for `request` under the active strategy.
    ///
    /// Candidates are tried sequentially and at most once each; the first
    /// success wins. Individual provider failures are logged and never
    /// surface to the caller.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, RouterError> {
        let plan = self.plan(request.messages());
        let strategy = plan.strategy;
        let candidates = plan.candidates.len();

        match self.request_budget {
            Some(budget) => {
                match tokio::time::timeout(budget, self.execute_plan(&plan, request)).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        warn!(
                            strategy = %strategy,
                            budget_ms = budget.as_millis() as u64,
                            "Request budget exhausted before any provider succeeded"
                        );
                        Err(RouterError::all_providers_failed(strategy, candidates))
                    }
                }
            }
            None => self.execute_plan(&plan, request).await,
        }
    }

    async fn execute_plan(
        &self,
        plan: &RoutePlan,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, RouterError> {
        let mut attempted = 0usize;

        for name in &plan.candidates {
            let Some(provider) = self.registry.get(name) else {
                continue;
            };

            if plan.probe_first && !self.probe(name, provider).await {
                info!(provider = %name, "Provider unavailable, skipping");
                continue;
            }

            attempted += 1;
            let started = Instant::now();
            match provider.generate(request).await {
                Ok(mut result) => {
                    // Report the registration, which may differ from the adapter's own name
                    result.provider_name.clone_from(name);
                    info!(
                        provider = %name,
                        model = %result.model_name,
                        strategy = %plan.strategy,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Provider succeeded"
                    );
                    return Ok(result);
                }
                Err(e) => {
                    warn!(
                        provider = %name,
                        strategy = %plan.strategy,
                        error = %e,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Provider failed, trying next candidate"
                    );
                }
            }
        }

        warn!(
            strategy = %plan.strategy,
            candidates = plan.candidates.len(),
            attempted,
            "All providers failed"
        );
        Err(RouterError::all_providers_failed(
            plan.strategy,
            plan.candidates.len(),
        ))
    }

    /// Availability probe bounded by the probe timeout; a timeout is a "no"
    async fn probe(&self, name: &str, provider: &Arc<dyn ProviderAdapter>) -> bool {
        match tokio::time::timeout(self.probe_timeout, provider.is_available()).await {
            Ok(available) => available,
            Err(_) => {
                warn!(
                    provider = %name,
                    timeout_ms = self.probe_timeout.as_millis() as u64,
                    "Availability probe timed out"
                );
                false
            }
        }
    }
}
