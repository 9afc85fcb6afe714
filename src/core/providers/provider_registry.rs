//! Provider Registry
//!
//! Ordered mapping from a stable provider name to its adapter. Populated once
//! at startup; routing only ever reads it.

use crate::core::traits::ProviderAdapter;
use std::sync::Arc;

/// Registry of provider adapters, kept in registration order
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<(String, Arc<dyn ProviderAdapter>)>,
}

impl ProviderRegistry {
    /// Create new provider registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under `name`.
    ///
    /// Re-registering a name replaces the adapter but keeps its position.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn ProviderAdapter>) {
        let name = name.into();
        match self.providers.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = provider,
            None => self.providers.push((name, provider)),
        }
    }

    /// Builder-style registration
    pub fn with(mut self, name: impl Into<String>, provider: Arc<dyn ProviderAdapter>) -> Self {
        self.register(name, provider);
        self
    }

    /// Get provider by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ProviderAdapter>> {
        self.providers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, provider)| provider)
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<String> {
        self.providers.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Check if provider is registered
    pub fn contains(&self, name: &str) -> bool {
        self.providers.iter().any(|(n, _)| n == name)
    }

    /// Get provider count
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
