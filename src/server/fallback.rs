//! Last-resort replies when no provider could answer

use crate::core::types::{Context, Message};
use std::fmt::Debug;

/// Produces a reply without any upstream AI call.
///
/// Used by the chat route after the load balancer reports that every
/// candidate failed, so callers still get a usable answer.
pub trait FallbackResponder: Send + Sync + Debug {
    /// Reply to the conversation
    fn respond(&self, messages: &[Message], context: Option<&Context>) -> String;
}

/// Always replies with the same message
#[derive(Debug, Clone)]
pub struct StaticResponder {
    message: String,
}

impl StaticResponder {
    /// Generic apology used by default
    pub const DEFAULT_MESSAGE: &'static str = "I'm unable to reach the AI service right now. \
        Please try again in a few moments. For urgent legal matters, consult a qualified lawyer.";

    /// Create a responder with a custom message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for StaticResponder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

impl FallbackResponder for StaticResponder {
    fn respond(&self, _messages: &[Message], _context: Option<&Context>) -> String {
        self.message.clone()
    }
}
