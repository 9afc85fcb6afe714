//! AI provider adapters
//!
//! The set of upstream providers is fixed and enumerated by [`ProviderType`].
//! Each one implements [`ProviderAdapter`](crate::core::traits::ProviderAdapter)
//! and is registered by name into a [`ProviderRegistry`].

pub mod gemini;
pub mod openrouter;
pub mod provider_registry;
pub mod unified_provider;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use openrouter::{OpenRouterConfig, OpenRouterProvider};
pub use provider_registry::ProviderRegistry;
pub use unified_provider::ProviderError;

use crate::core::traits::ProviderAdapter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Text substituted when a success response lacks the expected content field
pub const EMPTY_RESPONSE_PLACEHOLDER: &str = "No response generated";

/// Supported provider implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Google Gemini (lighter, faster)
    Gemini,
    /// OpenRouter (heavier, GPT-class)
    OpenRouter,
}

impl ProviderType {
    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::Gemini => "gemini",
            ProviderType::OpenRouter => "openrouter",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gemini" | "google" | "google-ai" => Ok(ProviderType::Gemini),
            "openrouter" | "open-router" => Ok(ProviderType::OpenRouter),
            other => Err(format!("Unsupported provider type: {}", other)),
        }
    }
}

/// Build an adapter from its gateway configuration entry
pub fn build_provider(
    config: &crate::config::ProviderConfig,
) -> Result<Arc<dyn ProviderAdapter>, ProviderError> {
    let provider_type = config
        .provider_type()
        .map_err(|e| ProviderError::configuration("registry", e))?;
    let api_key = config.api_key.clone().filter(|k| !k.is_empty());

    let provider: Arc<dyn ProviderAdapter> = match provider_type {
        ProviderType::Gemini => {
            let mut gemini = GeminiConfig {
                api_key,
                request_timeout: config.timeout,
                ..GeminiConfig::default()
            };
            if let Some(base_url) = &config.base_url {
                gemini.base_url = base_url.clone();
            }
            if let Some(model) = &config.model {
                gemini.model = model.clone();
            }
            Arc::new(GeminiProvider::new(gemini)?)
        }
        ProviderType::OpenRouter => {
            let mut openrouter = OpenRouterConfig {
                api_key,
                timeout_seconds: config.timeout,
                ..OpenRouterConfig::default()
            };
            if let Some(base_url) = &config.base_url {
                openrouter.base_url = base_url.clone();
            }
            if let Some(model) = &config.model {
                openrouter.model = model.clone();
            }
            if let Some(site_url) = &config.site_url {
                openrouter.site_url = site_url.clone();
            }
            openrouter.site_name = config.site_name.clone();
            Arc::new(OpenRouterProvider::new(openrouter)?)
        }
    };

    Ok(provider)
}

/// Build a registry from the enabled provider entries, in configuration order
pub fn build_registry(
    configs: &[crate::config::ProviderConfig],
) -> Result<ProviderRegistry, ProviderError> {
    let mut registry = ProviderRegistry::new();
    for config in configs.iter().filter(|c| c.enabled) {
        let provider = build_provider(config)?;
        tracing::info!(
            provider = %config.name,
            model = %provider.model(),
            credential = provider_has_key(config),
            "Registered provider"
        );
        registry.register(config.name.clone(), provider);
    }
    Ok(registry)
}

fn provider_has_key(config: &crate::config::ProviderConfig) -> bool {
    config.api_key.as_deref().is_some_and(|k| !k.is_empty())
}
