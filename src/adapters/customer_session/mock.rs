//! Mock merchant provider for testing.
//!
//! Serves a fixed intent configuration and customer session secret, and
//! supports:
//! - Error injection per port (one-shot or persistent)
//! - Call counting
//! - Secret rotation between calls

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::customer_sheet::{CustomerSessionClientSecret, IntentConfiguration};
use crate::domain::foundation::CustomerId;
use crate::ports::{IntentConfigurationProvider, ProviderError, SessionSecretProvider};

/// Mock implementation of both merchant provider ports.
///
/// # Example
///
/// ```ignore
/// let provider = MockCustomerSessionProvider::new("cus_1", "cuss_secret_1");
///
/// // First intent configuration call fails, later ones succeed
/// provider.fail_next_intent_configuration(ProviderError::network("offline"));
///
/// // ...exercise the manager...
/// assert_eq!(provider.intent_configuration_calls(), 2);
/// ```
#[derive(Clone)]
pub struct MockCustomerSessionProvider {
    inner: Arc<Mutex<MockState>>,
}

struct MockState {
    intent_configuration: IntentConfiguration,
    customer_id: CustomerId,
    client_secrets: VecDeque<String>,
    last_client_secret: String,
    intent_errors: VecDeque<ProviderError>,
    secret_error: Option<ProviderError>,
    intent_configuration_calls: usize,
    client_secret_calls: usize,
}

impl MockCustomerSessionProvider {
    /// Create a provider for one customer, offering card payments.
    ///
    /// # Panics
    ///
    /// Panics if `customer_id` is empty.
    pub fn new(customer_id: &str, client_secret: impl Into<String>) -> Self {
        let customer_id = CustomerId::new(customer_id).expect("mock customer id must not be empty");
        Self {
            inner: Arc::new(Mutex::new(MockState {
                intent_configuration: IntentConfiguration::new(["card"]),
                customer_id,
                client_secrets: VecDeque::new(),
                last_client_secret: client_secret.into(),
                intent_errors: VecDeque::new(),
                secret_error: None,
                intent_configuration_calls: 0,
                client_secret_calls: 0,
            })),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the intent configuration to serve.
    pub fn with_intent_configuration(self, configuration: IntentConfiguration) -> Self {
        self.inner.lock().unwrap().intent_configuration = configuration;
        self
    }

    /// Queue a secret to hand out on the next call; once the queue drains the
    /// last secret handed out keeps being served.
    pub fn queue_client_secret(&self, client_secret: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .client_secrets
            .push_back(client_secret.into());
    }

    /// Fail the next intent configuration call only.
    pub fn fail_next_intent_configuration(&self, error: ProviderError) {
        self.inner.lock().unwrap().intent_errors.push_back(error);
    }

    /// Fail every client secret call until cleared.
    pub fn set_client_secret_error(&self, error: ProviderError) {
        self.inner.lock().unwrap().secret_error = Some(error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.inner.lock().unwrap();
        state.intent_errors.clear();
        state.secret_error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn intent_configuration_calls(&self) -> usize {
        self.inner.lock().unwrap().intent_configuration_calls
    }

    pub fn client_secret_calls(&self) -> usize {
        self.inner.lock().unwrap().client_secret_calls
    }
}

#[async_trait]
impl IntentConfigurationProvider for MockCustomerSessionProvider {
    async fn intent_configuration(&self) -> Result<IntentConfiguration, ProviderError> {
        let mut state = self.inner.lock().unwrap();
        state.intent_configuration_calls += 1;

        if let Some(error) = state.intent_errors.pop_front() {
            return Err(error);
        }

        Ok(state.intent_configuration.clone())
    }
}

#[async_trait]
impl SessionSecretProvider for MockCustomerSessionProvider {
    async fn customer_session_client_secret(
        &self,
    ) -> Result<CustomerSessionClientSecret, ProviderError> {
        let mut state = self.inner.lock().unwrap();
        state.client_secret_calls += 1;

        if let Some(error) = state.secret_error.clone() {
            return Err(error);
        }

        if let Some(next) = state.client_secrets.pop_front() {
            state.last_client_secret = next;
        }

        Ok(CustomerSessionClientSecret::new(
            state.customer_id.clone(),
            state.last_client_secret.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_configured_values() {
        let provider = MockCustomerSessionProvider::new("cus_1", "cuss_secret_1")
            .with_intent_configuration(IntentConfiguration::new(["card", "mobilepay"]));

        let config = provider.intent_configuration().await.unwrap();
        assert_eq!(config.payment_method_types, vec!["card", "mobilepay"]);

        let secret = provider.customer_session_client_secret().await.unwrap();
        assert_eq!(secret.customer_id().as_str(), "cus_1");
        assert_eq!(secret.client_secret(), "cuss_secret_1");
    }

    #[tokio::test]
    async fn intent_error_is_one_shot() {
        let provider = MockCustomerSessionProvider::new("cus_1", "cuss_secret_1");
        provider.fail_next_intent_configuration(ProviderError::network("offline"));

        assert!(provider.intent_configuration().await.is_err());
        assert!(provider.intent_configuration().await.is_ok());
        assert_eq!(provider.intent_configuration_calls(), 2);
    }

    #[tokio::test]
    async fn secret_error_persists_until_cleared() {
        let provider = MockCustomerSessionProvider::new("cus_1", "cuss_secret_1");
        provider.set_client_secret_error(ProviderError::authentication("revoked"));

        assert!(provider.customer_session_client_secret().await.is_err());
        assert!(provider.customer_session_client_secret().await.is_err());

        provider.clear_errors();
        assert!(provider.customer_session_client_secret().await.is_ok());
        assert_eq!(provider.client_secret_calls(), 3);
    }

    #[tokio::test]
    async fn rotates_queued_secrets() {
        let provider = MockCustomerSessionProvider::new("cus_1", "cuss_secret_1");
        provider.queue_client_secret("cuss_secret_2");

        let first = provider.customer_session_client_secret().await.unwrap();
        let second = provider.customer_session_client_secret().await.unwrap();
        assert_eq!(first.client_secret(), "cuss_secret_2");
        assert_eq!(second.client_secret(), "cuss_secret_2");
    }
}
