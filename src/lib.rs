//! # Legal AI Gateway
//!
//! Load balancing and failover across upstream AI providers for a legal
//! assistant. Every request carries a full conversation; the active routing
//! strategy orders the registered providers and the load balancer tries them
//! one at a time until one answers.
//!
//! ## Features
//!
//! - **Provider adapters**: Google Gemini and OpenRouter behind one trait
//! - **Three strategies**: round-robin, intelligent (keyword/length based) and
//!   fallback (static priority with availability probes)
//! - **Runtime switching**: the active strategy can change while serving
//! - **HTTP surface**: health, routing stats, strategy switch and chat
//!
//! ## Library use
//!
//! ```rust,no_run
//! use legal_ai_gateway::core::providers::{GeminiProvider, OpenRouterProvider, ProviderRegistry};
//! use legal_ai_gateway::core::router::LoadBalancer;
//! use legal_ai_gateway::core::types::{GenerationRequest, Message};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = ProviderRegistry::new()
//!         .with("gemini", Arc::new(GeminiProvider::from_env()?))
//!         .with("openrouter", Arc::new(OpenRouterProvider::from_env()?));
//!
//!     let lb = LoadBalancer::with_defaults(registry);
//!     let request = GenerationRequest::new(vec![Message::user("What is a lien?")]);
//!     let result = lb.generate(&request).await?;
//!     println!("{} answered: {}", result.provider_name, result.content);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::Config;
pub use core::providers::{ProviderError, ProviderRegistry};
pub use core::router::{LoadBalancer, RouterError, RoutingStrategy};
pub use core::types::{GenerationRequest, GenerationResult, Message, MessageRole};
pub use utils::error::{GatewayError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
