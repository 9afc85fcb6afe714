//! Provider adapter trait definitions
//!
//! Every upstream AI API is wrapped behind [`ProviderAdapter`]. Adapters hold
//! no conversation state: the full conversation arrives on every call.
//!
//! # Design Principles
//!
//! 1. **Request uniformity**: every adapter receives the same [`GenerationRequest`]
//! 2. **Explicit outcomes**: `generate` returns a `Result`, the load balancer
//!    branches on it instead of unwinding
//! 3. **Never-failing probes**: `is_available` folds every error into `false`

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{GenerationRequest, GenerationResult};
use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

/// Uniform contract over one upstream AI API
#[async_trait]
pub trait ProviderAdapter: Send + Sync + Debug {
    /// Stable adapter name.
    ///
    /// The load balancer reports the registration name in
    /// [`GenerationResult::provider_name`], which defaults to this.
    fn name(&self) -> &'static str;

    /// Upstream model used for generations
    fn model(&self) -> &str;

    /// Send the conversation upstream and extract the completion.
    ///
    /// A success response that lacks the expected content field yields a
    /// placeholder text rather than an error.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, ProviderError>;

    /// Cheap, bounded check of whether the provider is usable right now.
    ///
    /// Must not panic; network errors, timeouts and missing configuration all
    /// report `false`.
    async fn is_available(&self) -> bool;
}

/// Common accessors over adapter configurations
pub trait ProviderConfig: Send + Sync + Clone + Debug + 'static {
    /// Validate configuration
    fn validate(&self) -> Result<(), String>;

    /// Get API key, `None` when no credential is configured
    fn api_key(&self) -> Option<&str>;

    /// Get API base URL
    fn api_base(&self) -> &str;

    /// Get request timeout
    fn timeout(&self) -> Duration;
}
