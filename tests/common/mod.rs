//! Common test utilities
//!
//! - Scripted provider fakes (`providers`)
//! - Conversation and configuration fixtures (`fixtures`)


pub use fixtures::{ConversationFactory, GatewayYaml};
pub use providers::{ScriptedProvider, Step, registry_with};
