//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::unified_provider::ProviderError;

// Configuration problems found while building adapters are startup errors,
// everything else stays a provider error.
impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { provider, message } => {
                GatewayError::Config(format!("{}: {}", provider, message))
            }
            other => GatewayError::Provider(other),
        }
    }
}
