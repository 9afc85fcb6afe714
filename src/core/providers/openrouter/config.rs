//! OpenRouter Provider Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::traits::ProviderConfig;

/// Default OpenRouter API base
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// Default routed model
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
/// Default `HTTP-Referer` value
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// OpenRouter provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    /// API key for OpenRouter
    pub api_key: Option<String>,
    /// Base URL for OpenRouter API
    pub base_url: String,
    /// Model identifier, `vendor/model`
    pub model: String,
    /// Site URL sent as `HTTP-Referer`
    pub site_url: String,
    /// Site name sent as `X-Title` (optional)
    pub site_name: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: None,
            timeout_seconds: 30,
        }
    }
}

impl ProviderConfig for OpenRouterConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("OpenRouter base URL is required".to_string());
        }

        if !self.base_url.starts_with("http") {
            return Err("OpenRouter base URL must start with http:// or https://".to_string());
        }

        if self.model.is_empty() {
            return Err("OpenRouter model is required".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    fn api_base(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl OpenRouterConfig {
    /// Fixed sampling temperature
    pub const TEMPERATURE: f32 = 0.7;
    /// Fixed completion token cap
    pub const MAX_TOKENS: u32 = 2048;

    /// Create new OpenRouter configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let base_url =
            std::env::var("OPENROUTER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("OPENROUTER_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let site_url = std::env::var("NEXTAUTH_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
        let site_name = std::env::var("OPENROUTER_SITE_NAME").ok();
        let timeout_seconds = std::env::var("OPENROUTER_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Self {
            api_key,
            base_url,
            model,
            site_url,
            site_name,
            timeout_seconds,
        }
    }

    /// Set site URL for OpenRouter request headers
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Set site name for OpenRouter request headers
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Model name without the vendor prefix (`openai/gpt-3.5-turbo` -> `gpt-3.5-turbo`)
    pub fn display_model(&self) -> &str {
        self.model
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.model)
    }

    /// Chat completions URL
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}
