//! Merchant-side providers for the customer sheet.
//!
//! The merchant app supplies two things: the intent configuration describing
//! which payment methods the sheet may save, and a customer session client
//! secret minted by the merchant's backend. Both are fallible async calls.

use async_trait::async_trait;

use crate::domain::customer_sheet::{CustomerSessionClientSecret, IntentConfiguration};

use super::ProviderError;

/// Supplies the merchant's intent configuration.
///
/// Callers memoize the first successful result, so implementations may be
/// expensive but should be idempotent.
#[async_trait]
pub trait IntentConfigurationProvider: Send + Sync {
    async fn intent_configuration(&self) -> Result<IntentConfiguration, ProviderError>;
}

/// Supplies a customer session client secret.
///
/// Called once per elements session fetch. Secrets may rotate, so results are
/// never reused across fetches.
#[async_trait]
pub trait SessionSecretProvider: Send + Sync {
    async fn customer_session_client_secret(
        &self,
    ) -> Result<CustomerSessionClientSecret, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn providers_are_object_safe() {
        fn _accepts_intent(_provider: &dyn IntentConfigurationProvider) {}
        fn _accepts_secret(_provider: &dyn SessionSecretProvider) {}
    }
}
