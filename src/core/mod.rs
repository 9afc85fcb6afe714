//! Core functionality for the Gateway
//!
//! This module contains the core business logic and data structures:
//! provider adapters, the adapter trait, request/result types and the
//! load-balancing router.

pub mod providers;
pub mod router;
pub mod traits;
pub mod types;
