//! Generation request and result types

use super::message::{Conversation, Message};
use serde::{Deserialize, Serialize};

/// Free-form context bag (user profile, memory, retrieved documents).
///
/// No fixed schema; adapters ignore fields they don't understand.
pub type Context = serde_json::Value;

/// A conversation plus optional context, as handed to an adapter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Ordered messages
    pub messages: Conversation,
    /// Optional context bag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl GenerationRequest {
    /// Create a request without context
    pub fn new(messages: Conversation) -> Self {
        Self {
            messages,
            context: None,
        }
    }

    /// Attach a context bag
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Borrow the messages
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// One successful completion. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Generated text
    pub content: String,
    /// Registered name of the provider that produced it
    pub provider_name: String,
    /// Upstream model name
    pub model_name: String,
    /// Total tokens reported by the upstream, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
}

impl GenerationResult {
    /// Create a result
    pub fn new(
        content: impl Into<String>,
        provider_name: impl Into<String>,
        model_name: impl Into<String>,
        tokens_used: Option<u64>,
    ) -> Self {
        Self {
            content: content.into(),
            provider_name: provider_name.into(),
            model_name: model_name.into(),
            tokens_used,
        }
    }
}
