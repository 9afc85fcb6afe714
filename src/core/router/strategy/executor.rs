//! Strategy executor for candidate ordering

use super::types::{RoutePlan, RoutingStrategy};
use crate::core::router::config::RoutingPolicy;
use crate::core::types::{Message, last_user_message};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Turns a strategy, the registered provider names and a conversation into a
/// [`RoutePlan`].
///
/// Holds the round-robin cursor, which is shared by every request routed
/// through the same load balancer.
#[derive(Debug)]
pub struct StrategyExecutor {
    policy: RoutingPolicy,
    /// Round-robin counter
    round_robin_counter: AtomicUsize,
}

impl StrategyExecutor {
    /// Create a new strategy executor
    pub fn new(policy: RoutingPolicy) -> Self {
        Self {
            policy,
            round_robin_counter: AtomicUsize::new(0),
        }
    }

    /// Routing policy in use
    pub fn policy(&self) -> &RoutingPolicy {
        &self.policy
    }

    /// Current round-robin cursor, always in `[0, provider_count)` once a
    /// round-robin request has been routed
    pub fn current_index(&self) -> usize {
        self.round_robin_counter.load(Ordering::Acquire)
    }

    /// Compute the candidate order for one request
    pub fn plan(
        &self,
        strategy: RoutingStrategy,
        registered: &[String],
        messages: &[Message],
    ) -> RoutePlan {
        let (candidates, probe_first) = match strategy {
            RoutingStrategy::RoundRobin => (self.round_robin(registered), false),
            RoutingStrategy::Intelligent => (self.intelligent(registered, messages), false),
            RoutingStrategy::Fallback => (self.fallback(registered), true),
        };

        debug!(strategy = %strategy, candidates = ?candidates, "Computed route plan");

        RoutePlan {
            strategy,
            candidates,
            probe_first,
        }
    }

    /// Start at the cursor and wrap through every registered provider.
    ///
    /// The cursor advances exactly once per call, modulo the provider count,
    /// regardless of how the request later turns out.
    fn round_robin(&self, registered: &[String]) -> Vec<String> {
        let count = registered.len();
        if count == 0 {
            return Vec::new();
        }

        let previous = match self.round_robin_counter.fetch_update(
            Ordering::AcqRel,
            Ordering::Acquire,
            |current| Some((current % count + 1) % count),
        ) {
            Ok(previous) | Err(previous) => previous,
        };
        let start = previous % count;

        registered
            .iter()
            .cycle()
            .skip(start)
            .take(count)
            .cloned()
            .collect()
    }

    /// Preferred provider first, then the other one
    fn intelligent(&self, registered: &[String], messages: &[Message]) -> Vec<String> {
        let complex = last_user_message(messages).is_some_and(|text| self.policy.is_complex(text));
        let (preferred, other) = if complex {
            (&self.policy.heavy_provider, &self.policy.light_provider)
        } else {
            (&self.policy.light_provider, &self.policy.heavy_provider)
        };

        debug!(complex, preferred = %preferred, "Classified request");

        registered_in_order([preferred, other], registered)
    }

    fn fallback(&self, registered: &[String]) -> Vec<String> {
        registered_in_order(self.policy.fallback_order.iter(), registered)
    }
}

/// Keep only registered names, dropping repeats
fn registered_in_order<'a>(
    names: impl IntoIterator<Item = &'a String>,
    registered: &[String],
) -> Vec<String> {
    let mut ordered: Vec<String> = Vec::new();
    for name in names {
        if registered.contains(name) && !ordered.contains(name) {
            ordered.push(name.clone());
        }
    }
    ordered
}
