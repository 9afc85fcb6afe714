//! Gemini Provider
//!
//! Google AI Studio adapter, the lighter and faster provider in the default
//! routing policy.
//!
//! Documentation: https://ai.google.dev/api/generate-content

pub mod config;
pub mod provider;

pub use config::GeminiConfig;
pub use provider::GeminiProvider;
