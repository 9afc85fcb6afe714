//! OpenRouter Provider
//!
//! OpenRouter is a unified, OpenAI-compatible API in front of many models.
//!
//! Documentation: https://openrouter.ai/docs

pub mod config;
pub mod provider;

pub use config::OpenRouterConfig;
pub use provider::OpenRouterProvider;
