//! OpenRouter Provider Implementation
//!
//! OpenAI-compatible chat completions adapter, the heavier provider in the
//! default routing policy.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use super::config::OpenRouterConfig;
use crate::core::providers::EMPTY_RESPONSE_PLACEHOLDER;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::{ProviderAdapter, ProviderConfig};
use crate::core::types::{GenerationRequest, GenerationResult, Message};

const PROVIDER_NAME: &str = "openrouter";

/// OpenRouter provider implementation
#[derive(Debug, Clone)]
pub struct OpenRouterProvider {
    config: OpenRouterConfig,
    http_client: Client,
}

impl OpenRouterProvider {
    /// Create new OpenRouter provider
    pub fn new(config: OpenRouterConfig) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, e))?;

        let http_client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                ProviderError::configuration(
                    PROVIDER_NAME,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create provider from environment
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(OpenRouterConfig::from_env())
    }

    /// Get configuration
    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Transform the conversation into a chat completions body
    fn transform_request(&self, messages: &[Message]) -> Value {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();

        json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": OpenRouterConfig::TEMPERATURE,
            "max_tokens": OpenRouterConfig::MAX_TOKENS,
        })
    }

    /// Extract text and usage; a missing content field yields the placeholder
    fn transform_response(&self, data: &Value) -> GenerationResult {
        let content = data
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .unwrap_or(EMPTY_RESPONSE_PLACEHOLDER);

        let tokens_used = data.pointer("/usage/total_tokens").and_then(Value::as_u64);

        GenerationResult::new(
            content,
            PROVIDER_NAME,
            self.config.display_model(),
            tokens_used,
        )
    }
}

#[async_trait]
impl ProviderAdapter for OpenRouterProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ProviderError> {
        let api_key = self.config.api_key().ok_or_else(|| {
            ProviderError::authentication(PROVIDER_NAME, "OpenRouter API key not configured")
        })?;

        let body = self.transform_request(request.messages());
        let url = self.config.completions_url();
        debug!(url = %url, model = %self.config.model, "Sending OpenRouter request");

        let mut builder = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.config.site_url)
            .json(&body);
        if let Some(site_name) = &self.config.site_name {
            builder = builder.header("X-Title", site_name);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(PROVIDER_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_http_status(
                PROVIDER_NAME,
                status.as_u16(),
                &text,
            ));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::response_parsing(PROVIDER_NAME, e.to_string()))?;

        Ok(self.transform_response(&data))
    }

    /// Credential presence only; no network call.
    async fn is_available(&self) -> bool {
        self.config.api_key().is_some()
    }
}
