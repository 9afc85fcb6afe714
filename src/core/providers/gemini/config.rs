//! Gemini Configuration Module

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::traits::ProviderConfig;

/// Default Google AI Studio base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Gemini adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (Google AI Studio). Absent keys fail generation, not construction.
    pub api_key: Option<String>,

    /// Base URL including the API version
    pub base_url: String,

    /// Model to call
    pub model: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Availability probe timeout in milliseconds
    pub probe_timeout_ms: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: 30,
            probe_timeout_ms: 3000,
        }
    }
}

impl GeminiConfig {
    /// Fixed sampling temperature
    pub const TEMPERATURE: f32 = 0.7;
    /// Fixed output token cap
    pub const MAX_OUTPUT_TOKENS: u32 = 2048;

    /// Create a configuration with an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_key = std::env::var("GOOGLE_AI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            base_url,
            model,
            ..Default::default()
        }
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

    /// Set request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }

    /// Set probe timeout
    pub fn with_probe_timeout_ms(mut self, millis: u64) -> Self {
        self.probe_timeout_ms = millis;
        self
    }

    /// URL for an operation on the configured model
    pub fn get_endpoint(&self, operation: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            self.model,
            operation
        )
    }

    /// URL of the model metadata resource, used for probing
    pub fn model_url(&self) -> String {
        format!("{}/models/{}", self.base_url.trim_end_matches('/'), self.model)
    }
}

impl ProviderConfig for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("Gemini base URL is required".to_string());
        }

        if !self.base_url.starts_with("http") {
            return Err("Gemini base URL must start with http:// or https://".to_string());
        }

        if self.model.is_empty() {
            return Err("Gemini model is required".to_string());
        }

        if self.request_timeout == 0 {
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
        Duration::from_secs(self.request_timeout)
    }
}
