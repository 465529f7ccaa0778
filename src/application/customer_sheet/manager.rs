//! Customer session elements session manager.
//!
//! Owns the cached customer ephemeral key and the memoized intent
//! configuration, and decides when a new elements session must be fetched.
//!
//! # Flow
//!
//! ```text
//! fetch_customer_session_ephemeral_key
//!   cached key fresh? ──yes──> return it
//!        │ no
//!        v
//! fetch_elements_session
//!   1. intent configuration (memoized after first success)
//!   2. customer session client secret (every time)
//!   3. saved payment method selection for the customer
//!   4. remote elements session fetch
//!   5. replace cached key if the response has a customer session
//! ```
//!
//! # Concurrency
//!
//! The cached key sits behind an async `RwLock` and is only ever replaced
//! whole, after the remote call has returned. Dropping a caller's future
//! therefore never leaves a partial write behind.
//!
//! Without deduplication, concurrent callers each fetch and the last write
//! wins. With `SessionConfig::deduplicate_in_flight`, concurrent
//! `fetch_elements_session` calls await one shared fetch; the manager keeps
//! only a weak handle to it, so the fetch is abandoned once every caller is
//! gone.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt, Shared, WeakShared};
use tokio::sync::{OnceCell, RwLock};

use crate::config::SessionConfig;
use crate::domain::customer_sheet::{
    CachedCustomerEphemeralKey, CachedEphemeralKey, CustomerConfiguration, ElementsSession,
    ElementsSessionRequest, InitializationMode, IntentConfiguration, SelectionFlags,
};
use crate::ports::{
    Clock, ElementsSessionRepository, IntentConfigurationProvider, SelectionStore,
    SessionSecretProvider,
};

use super::SessionError;

/// Operations the payment sheet UI calls to obtain customer credentials.
#[async_trait]
pub trait CustomerSessionElementsSessionManager: Send + Sync {
    /// Return a usable ephemeral key, fetching a new elements session only
    /// when the cached key is missing or expired.
    async fn fetch_customer_session_ephemeral_key(
        &self,
    ) -> Result<CachedEphemeralKey, SessionError>;

    /// Fetch a new elements session unconditionally, refreshing the cached
    /// key from it when it carries one.
    async fn fetch_elements_session(&self) -> Result<ElementsSession, SessionError>;
}

type SessionFetch = BoxFuture<'static, Result<ElementsSession, SessionError>>;

/// Collaborators plus the state that outlives a single fetch.
///
/// Held in an `Arc` so a shared fetch can run without borrowing the manager.
struct ManagerCore {
    elements_session_repository: Arc<dyn ElementsSessionRepository>,
    selection_store: Arc<dyn SelectionStore>,
    intent_configuration_provider: Arc<dyn IntentConfigurationProvider>,
    session_secret_provider: Arc<dyn SessionSecretProvider>,
    clock: Arc<dyn Clock>,
    cached_ephemeral_key: RwLock<CachedCustomerEphemeralKey>,
    intent_configuration: OnceCell<IntentConfiguration>,
}

/// Default implementation of [`CustomerSessionElementsSessionManager`].
///
/// One instance serves one customer sheet; share it behind an `Arc`.
pub struct DefaultCustomerSessionElementsSessionManager {
    core: Arc<ManagerCore>,
    config: SessionConfig,
    in_flight: Mutex<Option<WeakShared<SessionFetch>>>,
}

impl DefaultCustomerSessionElementsSessionManager {
    pub fn new(
        elements_session_repository: Arc<dyn ElementsSessionRepository>,
        selection_store: Arc<dyn SelectionStore>,
        intent_configuration_provider: Arc<dyn IntentConfigurationProvider>,
        session_secret_provider: Arc<dyn SessionSecretProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            core: Arc::new(ManagerCore {
                elements_session_repository,
                selection_store,
                intent_configuration_provider,
                session_secret_provider,
                clock,
                cached_ephemeral_key: RwLock::new(CachedCustomerEphemeralKey::None),
                intent_configuration: OnceCell::new(),
            }),
            config: SessionConfig::default(),
            in_flight: Mutex::new(None),
        }
    }

    /// Replace the session behaviour configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Snapshot of the cached key, without checking freshness.
    pub async fn cached_ephemeral_key(&self) -> CachedCustomerEphemeralKey {
        self.core.cached_ephemeral_key().await
    }

    /// The memoized intent configuration, once one has been fetched.
    pub fn intent_configuration(&self) -> Option<&IntentConfiguration> {
        self.core.intent_configuration.get()
    }

    /// Join the running shared fetch, or start one.
    fn join_or_start_fetch(&self) -> Shared<SessionFetch> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(running) = in_flight.as_ref().and_then(|weak| weak.upgrade()) {
            // A finished fetch is not reused: every call gets a round trip.
            if running.peek().is_none() {
                tracing::debug!("Joining in-flight elements session fetch");
                return running;
            }
        }

        let core = Arc::clone(&self.core);
        let fetch = async move { core.fetch_elements_session().await }
            .boxed()
            .shared();
        *in_flight = fetch.downgrade();
        fetch
    }
}

#[async_trait]
impl CustomerSessionElementsSessionManager for DefaultCustomerSessionElementsSessionManager {
    async fn fetch_customer_session_ephemeral_key(
        &self,
    ) -> Result<CachedEphemeralKey, SessionError> {
        let now = self.core.clock.now();
        let cached = self.core.cached_ephemeral_key().await;

        if let Some(key) = cached.fresh(now) {
            tracing::trace!(
                customer_id = %key.customer_id(),
                expires_at = key.expires_at().as_unix_secs(),
                "Using cached ephemeral key"
            );
            return Ok(key.clone());
        }

        tracing::debug!(
            had_key = cached.is_available(),
            "Ephemeral key missing or expired, fetching elements session"
        );

        self.fetch_elements_session().await?;

        match self.core.cached_ephemeral_key().await {
            CachedCustomerEphemeralKey::Available(key) => Ok(key),
            CachedCustomerEphemeralKey::None => {
                tracing::error!("Elements session fetch succeeded without a customer session");
                Err(SessionError::NoEphemeralKey)
            }
        }
    }

    async fn fetch_elements_session(&self) -> Result<ElementsSession, SessionError> {
        if !self.config.deduplicate_in_flight {
            return self.core.fetch_elements_session().await;
        }

        self.join_or_start_fetch().await
    }
}

impl ManagerCore {
    async fn cached_ephemeral_key(&self) -> CachedCustomerEphemeralKey {
        self.cached_ephemeral_key.read().await.clone()
    }

    /// Memoized intent configuration.
    ///
    /// Concurrent first callers share one provider call; a failed call leaves
    /// nothing memoized.
    async fn intent_configuration(&self) -> Result<IntentConfiguration, SessionError> {
        let configuration = self
            .intent_configuration
            .get_or_try_init(|| async {
                tracing::debug!("Resolving intent configuration");
                self.intent_configuration_provider
                    .intent_configuration()
                    .await
            })
            .await
            .map_err(|e| {
                tracing::warn!("Failed to resolve intent configuration: {}", e);
                SessionError::intent_configuration(e)
            })?;

        Ok(configuration.clone())
    }

    async fn fetch_elements_session(&self) -> Result<ElementsSession, SessionError> {
        // 1. Intent configuration
        let intent_configuration = self.intent_configuration().await?;

        // 2. Customer session client secret
        let client_secret = self
            .session_secret_provider
            .customer_session_client_secret()
            .await
            .map_err(|e| {
                tracing::warn!("Failed to resolve customer session client secret: {}", e);
                SessionError::customer_session_secret(e)
            })?;

        // 3. Saved selection; wallet selections are not a usable hint here
        let default_payment_method_id = self
            .selection_store
            .saved_selection(client_secret.customer_id(), SelectionFlags::no_wallets())
            .await
            .and_then(|selection| selection.payment_method_id().map(str::to_owned));

        let customer_id = client_secret.customer_id().clone();
        let request = ElementsSessionRequest {
            initialization_mode: InitializationMode::deferred_setup(&intent_configuration),
            default_payment_method_id,
            customer: CustomerConfiguration::with_customer_session(client_secret),
            external_payment_methods: Vec::new(),
        };

        tracing::debug!(
            customer_id = %customer_id,
            payment_method_types = ?request.initialization_mode.payment_method_types(),
            has_default_payment_method = request.default_payment_method_id.is_some(),
            "Fetching elements session"
        );

        // 4. Remote fetch
        let elements_session = self
            .elements_session_repository
            .get(request)
            .await
            .map_err(|e| {
                tracing::warn!(customer_id = %customer_id, "Failed to fetch elements session: {}", e);
                SessionError::elements_session(e)
            })?;

        // 5. Cache the key if the response carried one
        match elements_session.ephemeral_key() {
            Some(key) => {
                tracing::debug!(
                    customer_id = %key.customer_id(),
                    expires_at = key.expires_at().as_unix_secs(),
                    "Caching customer ephemeral key"
                );
                *self.cached_ephemeral_key.write().await = key.into();
            }
            None => {
                tracing::warn!(
                    customer_id = %customer_id,
                    "Elements session has no customer session, keeping cached key"
                );
            }
        }

        Ok(elements_session)
    }
}
