//! Core type definition module
//!
//! Conversation and generation types shared by adapters, strategies and the
//! load balancer.

pub mod generation;
pub mod message;

// Re-export all public types
pub use generation::*;
pub use message::*;
