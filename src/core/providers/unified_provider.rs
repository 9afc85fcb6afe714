//! Unified Provider Error Handling
//!
//! Single error type for every provider adapter.
//!
//! | Variant | Purpose | HTTP Status |
//! |------|------|------------|
//! | Authentication | Credential missing or rejected | 401 |
//! | Configuration | Adapter could not be built | 500 |
//! | RateLimit | Upstream throttled the call | 429 |
//! | ApiError | Any other non-success status | upstream |
//! | Network | Transport failure | 502 |
//! | Timeout | Request exceeded the adapter timeout | 504 |
//! | ResponseParsing | Body was not valid JSON | 502 |
//!
//! A `ProviderError` never crosses the load balancer boundary; it only drives
//! the "try next candidate" loop and is logged there.

/// Unified provider error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Response parsing error for {provider}: {message}")]
    ResponseParsing {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn response_parsing(provider: &'static str, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    /// Map a non-success upstream status to an error
    pub fn from_http_status(provider: &'static str, status: u16, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, truncate_body(body))
        };
        match status {
            401 | 403 => Self::Authentication { provider, message },
            429 => Self::RateLimit { provider, message },
            _ => Self::ApiError {
                provider,
                status,
                message,
            },
        }
    }

    /// Map a reqwest transport error
    pub fn from_reqwest(provider: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(provider, err.to_string())
        } else {
            Self::network(provider, err.to_string())
        }
    }

    /// Provider that raised the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Authentication { provider, .. }
            | Self::Configuration { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ResponseParsing { provider, .. } => provider,
        }
    }

    /// HTTP status that best describes the error
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Authentication { .. } => 401,
            Self::Configuration { .. } => 500,
            Self::RateLimit { .. } => 429,
            Self::ApiError { status, .. } => *status,
            Self::Network { .. } | Self::ResponseParsing { .. } => 502,
            Self::Timeout { .. } => 504,
        }
    }
}

/// Upstream bodies are cut to this many bytes in error messages
const MAX_ERROR_BODY: usize = 256;

fn truncate_body(body: &str) -> &str {
    crate::utils::truncate_utf8(body, MAX_ERROR_BODY)
}
