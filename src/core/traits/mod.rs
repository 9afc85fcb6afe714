//! Core traits module
//!
//! Contains the abstract interfaces provider adapters implement

pub mod provider;

pub use provider::*;
