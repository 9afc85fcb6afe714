//! Integration tests
//!
//! These tests verify the interaction between configuration, adapters, the
//! load balancer and the HTTP layer.

pub mod load_balancer_tests;
pub mod provider_http_tests;
