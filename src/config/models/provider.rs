//! Provider configuration

use super::*;
use crate::core::providers::ProviderType;
use serde::{Deserialize, Serialize};

/// Provider configuration
///
/// `name` is the key routing refers to; `provider_type` picks the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name
    pub name: String,
    /// Provider type (gemini, openrouter)
    pub provider_type: String,
    /// API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model override
    #[serde(default)]
    pub model: Option<String>,
    /// Referer sent to OpenRouter
    #[serde(default)]
    pub site_url: Option<String>,
    /// Title sent to OpenRouter
    #[serde(default)]
    pub site_name: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Whether provider is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            provider_type: String::new(),
            api_key: None,
            base_url: None,
            model: None,
            site_url: None,
            site_name: None,
            timeout: default_timeout(),
            enabled: true,
        }
    }
}

impl ProviderConfig {
    /// Gemini entry under its canonical name
    pub fn gemini(api_key: Option<String>) -> Self {
        Self {
            name: ProviderType::Gemini.to_string(),
            provider_type: ProviderType::Gemini.to_string(),
            api_key,
            ..Self::default()
        }
    }

    /// OpenRouter entry under its canonical name
    pub fn openrouter(api_key: Option<String>) -> Self {
        Self {
            name: ProviderType::OpenRouter.to_string(),
            provider_type: ProviderType::OpenRouter.to_string(),
            api_key,
            ..Self::default()
        }
    }

    /// Parsed provider type
    pub fn provider_type(&self) -> Result<ProviderType, String> {
        self.provider_type.parse()
    }

    /// Whether a non-empty credential is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
