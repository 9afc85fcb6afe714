//! Gemini Provider Implementation
//!
//! Google AI Studio `generateContent` adapter. The conversation is flattened
//! into a single prompt string because the endpoint is called in
//! single-turn mode.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use super::config::GeminiConfig;
use crate::core::providers::EMPTY_RESPONSE_PLACEHOLDER;
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::{ProviderAdapter, ProviderConfig};
use crate::core::types::{GenerationRequest, GenerationResult, Message};

const PROVIDER_NAME: &str = "gemini";

/// Gemini provider implementation
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiProvider {
    /// Create new Gemini provider
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
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
        Self::new(GeminiConfig::from_env())
    }

    /// Get configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Flatten the conversation into `"role: content"` blocks separated by a blank line
    pub fn format_messages(messages: &[Message]) -> String {
        messages
            .iter()
            .map(|m| format!("{}: {}", m.role, m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the `generateContent` body
    fn transform_request(&self, messages: &[Message]) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": Self::format_messages(messages) }]
            }],
            "generationConfig": {
                "temperature": GeminiConfig::TEMPERATURE,
                "maxOutputTokens": GeminiConfig::MAX_OUTPUT_TOKENS,
            }
        })
    }

    /// Extract text and usage; a missing text field yields the placeholder
    fn transform_response(&self, data: &Value) -> GenerationResult {
        let content = data
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .unwrap_or(EMPTY_RESPONSE_PLACEHOLDER);

        let tokens_used = data
            .pointer("/usageMetadata/totalTokenCount")
            .and_then(Value::as_u64);

        GenerationResult::new(content, PROVIDER_NAME, &self.config.model, tokens_used)
    }
}

#[async_trait]
impl ProviderAdapter for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ProviderError> {
        let api_key = self.config.api_key().ok_or_else(|| {
            ProviderError::authentication(PROVIDER_NAME, "Gemini API key not configured")
        })?;

        let body = self.transform_request(request.messages());
        let url = self.config.get_endpoint("generateContent");
        debug!(url = %url, messages = request.messages.len(), "Sending Gemini request");

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
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

    async fn is_available(&self) -> bool {
        let Some(api_key) = self.config.api_key() else {
            return false;
        };

        let probe = self
            .http_client
            .get(self.config.model_url())
            .query(&[("key", api_key)])
            .timeout(Duration::from_millis(self.config.probe_timeout_ms))
            .send()
            .await;

        match probe {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Gemini availability probe failed");
                false
            }
        }
    }
}
