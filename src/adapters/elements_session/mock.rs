//! Mock elements session repository for testing.
//!
//! Provides a configurable mock implementation of `ElementsSessionRepository`
//! for unit and integration tests. Supports:
//! - Pre-configured responses
//! - Error injection
//! - Request tracking
//! - Artificial latency, to exercise concurrent and abandoned fetches

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::customer_sheet::{
    CustomerSession, ElementsSession, ElementsSessionCustomer, ElementsSessionRequest,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{ElementsSessionRepository, ProviderError};

/// Mock elements session repository.
///
/// With nothing queued, every call answers with a session for the requested
/// customer carrying a fresh key `ek_mock_<n>`, where `n` counts calls.
///
/// # Example
///
/// ```ignore
/// let mock = MockElementsSessionRepository::new().with_key_expiry(1000);
///
/// // Inject errors
/// mock.set_error(ProviderError::network("offline"));
///
/// // Inspect what the manager asked for
/// let request = mock.last_request().unwrap();
/// ```
#[derive(Clone, Default)]
pub struct MockElementsSessionRepository {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Responses handed out in order before falling back to generated ones.
    queued: VecDeque<ElementsSession>,

    /// Error to return on the next call only.
    next_error: Option<ProviderError>,

    /// Expiry (Unix seconds) for generated keys.
    key_expiry: Option<i64>,

    /// Omit the customer block from generated sessions.
    without_customer: bool,

    /// Delay before answering.
    latency: Option<Duration>,

    /// Every request received, including ones that were later abandoned.
    requests: Vec<ElementsSessionRequest>,

    /// Calls that ran to completion.
    completed: usize,
}

impl MockElementsSessionRepository {
    /// Create a new mock with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Expiry (Unix seconds) used for generated keys.
    ///
    /// Defaults to half an hour from the time of the call.
    pub fn with_key_expiry(self, unix_secs: i64) -> Self {
        self.inner.lock().unwrap().key_expiry = Some(unix_secs);
        self
    }

    /// Answer with sessions that carry no customer block.
    pub fn without_customer(self) -> Self {
        self.inner.lock().unwrap().without_customer = true;
        self
    }

    /// Wait this long before answering each call.
    pub fn with_latency(self, latency: Duration) -> Self {
        self.inner.lock().unwrap().latency = Some(latency);
        self
    }

    /// Queue a response for a later call.
    pub fn queue_session(&self, session: ElementsSession) {
        self.inner.lock().unwrap().queued.push_back(session);
    }

    /// Set an error to return on the next call.
    pub fn set_error(&self, error: ProviderError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// Number of calls started.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    /// Number of calls that returned a result.
    pub fn completed_count(&self) -> usize {
        self.inner.lock().unwrap().completed
    }

    pub fn requests(&self) -> Vec<ElementsSessionRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<ElementsSessionRequest> {
        self.inner.lock().unwrap().requests.last().cloned()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn generated_session(
        request: &ElementsSessionRequest,
        call_number: usize,
        key_expiry: i64,
        without_customer: bool,
    ) -> ElementsSession {
        let mut session = ElementsSession::new(
            request
                .initialization_mode
                .payment_method_types()
                .iter()
                .cloned(),
        );
        session.id = Some(format!("elements_session_mock_{}", call_number));

        if without_customer {
            return session;
        }

        let mut customer = ElementsSessionCustomer::new(CustomerSession::new(
            format!("cuss_mock_{}", call_number),
            request.customer.customer_id().clone(),
            format!("ek_mock_{}", call_number),
            key_expiry,
        ));
        customer.default_payment_method = request.default_payment_method_id.clone();
        session.with_customer(customer)
    }
}

#[async_trait]
impl ElementsSessionRepository for MockElementsSessionRepository {
    async fn get(&self, request: ElementsSessionRequest) -> Result<ElementsSession, ProviderError> {
        let (call_number, latency) = {
            let mut state = self.inner.lock().unwrap();
            state.requests.push(request.clone());
            (state.requests.len(), state.latency)
        };

        // Always suspend once so concurrent callers interleave.
        tokio::task::yield_now().await;
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let mut state = self.inner.lock().unwrap();
        state.completed += 1;

        if let Some(error) = state.next_error.take() {
            return Err(error);
        }

        if let Some(session) = state.queued.pop_front() {
            return Ok(session);
        }

        let key_expiry = state
            .key_expiry
            .unwrap_or_else(|| Timestamp::now().plus_secs(1800).as_unix_secs());

        Ok(Self::generated_session(
            &request,
            call_number,
            key_expiry,
            state.without_customer,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer_sheet::{
        CustomerConfiguration, CustomerSessionClientSecret, InitializationMode,
        IntentConfiguration,
    };
    use crate::domain::foundation::CustomerId;

    fn request() -> ElementsSessionRequest {
        ElementsSessionRequest {
            initialization_mode: InitializationMode::deferred_setup(&IntentConfiguration::new([
                "card",
            ])),
            default_payment_method_id: Some("pm_1".to_string()),
            customer: CustomerConfiguration::with_customer_session(
                CustomerSessionClientSecret::new(CustomerId::new("cus_1").unwrap(), "cuss_1"),
            ),
            external_payment_methods: vec![],
        }
    }

    #[tokio::test]
    async fn generates_session_for_requested_customer() {
        let mock = MockElementsSessionRepository::new().with_key_expiry(1000);

        let session = mock.get(request()).await.unwrap();

        assert_eq!(session.payment_method_types, vec!["card"]);
        let key = session.ephemeral_key().unwrap();
        assert_eq!(key.customer_id().as_str(), "cus_1");
        assert_eq!(key.ephemeral_key(), "ek_mock_1");
        assert_eq!(key.expires_at().as_unix_secs(), 1000);
        assert_eq!(
            session.customer.unwrap().default_payment_method.as_deref(),
            Some("pm_1")
        );
    }

    #[tokio::test]
    async fn without_customer_omits_block() {
        let mock = MockElementsSessionRepository::new().without_customer();
        let session = mock.get(request()).await.unwrap();
        assert!(session.customer.is_none());
    }

    #[tokio::test]
    async fn queued_sessions_take_precedence() {
        let mock = MockElementsSessionRepository::new();
        mock.queue_session(ElementsSession::new(["mobilepay"]));

        let first = mock.get(request()).await.unwrap();
        let second = mock.get(request()).await.unwrap();

        assert_eq!(first.payment_method_types, vec!["mobilepay"]);
        assert!(first.customer.is_none());
        assert!(second.customer.is_some());
    }

    #[tokio::test]
    async fn error_is_returned_once() {
        let mock = MockElementsSessionRepository::new();
        mock.set_error(ProviderError::network("offline"));

        assert!(mock.get(request()).await.is_err());
        assert!(mock.get(request()).await.is_ok());
        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.completed_count(), 2);
    }

    #[tokio::test]
    async fn tracks_requests() {
        let mock = MockElementsSessionRepository::new();
        mock.get(request()).await.unwrap();

        let last = mock.last_request().unwrap();
        assert_eq!(last.customer.customer_id().as_str(), "cus_1");
        assert!(last.external_payment_methods.is_empty());
        assert_eq!(mock.requests().len(), 1);
    }
}
