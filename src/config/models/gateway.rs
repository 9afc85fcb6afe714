//! Main gateway configuration

use super::*;
use crate::core::providers::ProviderType;
use serde::{Deserialize, Serialize};

/// Environment variables the gateway reads
pub mod env_vars {
    pub const GOOGLE_AI_API_KEY: &str = "GOOGLE_AI_API_KEY";
    pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
    pub const NEXTAUTH_URL: &str = "NEXTAUTH_URL";
    pub const AI_STRATEGY: &str = "AI_STRATEGY";
    pub const GATEWAY_HOST: &str = "GATEWAY_HOST";
    pub const GATEWAY_PORT: &str = "GATEWAY_PORT";
}

/// Main gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Provider configurations, in registration order
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderConfig>,
    /// Router configuration
    #[serde(default)]
    pub router: RouterConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Both supported providers under their canonical names, without credentials
pub fn default_providers() -> Vec<ProviderConfig> {
    vec![ProviderConfig::gemini(None), ProviderConfig::openrouter(None)]
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            providers: default_providers(),
            router: RouterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Defaults with the process environment applied
    pub fn from_env() -> Result<Self, String> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup`; empty values are ignored.
    ///
    /// Credentials and the referer apply to every entry of the matching
    /// provider type.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(env_vars::GOOGLE_AI_API_KEY) {
            self.providers_of_type(ProviderType::Gemini)
                .for_each(|p| p.api_key = Some(key.clone()));
        }
        if let Some(key) = lookup(env_vars::OPENROUTER_API_KEY) {
            self.providers_of_type(ProviderType::OpenRouter)
                .for_each(|p| p.api_key = Some(key.clone()));
        }
        if let Some(url) = lookup(env_vars::NEXTAUTH_URL) {
            self.providers_of_type(ProviderType::OpenRouter)
                .for_each(|p| p.site_url = Some(url.clone()));
        }
        if let Some(strategy) = lookup(env_vars::AI_STRATEGY) {
            self.router.strategy = strategy;
        }
        if let Some(host) = lookup(env_vars::GATEWAY_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(env_vars::GATEWAY_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {}: {} ({})", env_vars::GATEWAY_PORT, port, e))?;
        }

        Ok(())
    }

    fn providers_of_type(
        &mut self,
        provider_type: ProviderType,
    ) -> impl Iterator<Item = &mut ProviderConfig> {
        self.providers
            .iter_mut()
            .filter(move |p| p.provider_type().ok() == Some(provider_type))
    }

    /// Get provider by name
    pub fn get_provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// Enabled provider entries, in registration order
    pub fn enabled_providers(&self) -> impl Iterator<Item = &ProviderConfig> {
        self.providers.iter().filter(|p| p.enabled)
    }
}
