//! Provider backed by merchant-supplied async callbacks.
//!
//! ```ignore
//! let provider = CallbackCustomerSessionProvider::new(
//!     || async { Ok::<_, ProviderError>(IntentConfiguration::new(["card", "mobilepay"])) },
//!     move || {
//!         let backend = backend.clone();
//!         async move { backend.create_customer_session().await }
//!     },
//! );
//! ```

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};

use crate::domain::customer_sheet::{CustomerSessionClientSecret, IntentConfiguration};
use crate::ports::{IntentConfigurationProvider, ProviderError, SessionSecretProvider};

type IntentCallback =
    dyn Fn() -> BoxFuture<'static, Result<IntentConfiguration, ProviderError>> + Send + Sync;
type SecretCallback =
    dyn Fn() -> BoxFuture<'static, Result<CustomerSessionClientSecret, ProviderError>> + Send + Sync;

/// Adapts two merchant callbacks to the provider ports.
#[derive(Clone)]
pub struct CallbackCustomerSessionProvider {
    intent_configuration: Arc<IntentCallback>,
    client_secret: Arc<SecretCallback>,
}

impl CallbackCustomerSessionProvider {
    pub fn new<I, IFut, S, SFut>(intent_configuration: I, client_secret: S) -> Self
    where
        I: Fn() -> IFut + Send + Sync + 'static,
        IFut: Future<Output = Result<IntentConfiguration, ProviderError>> + Send + 'static,
        S: Fn() -> SFut + Send + Sync + 'static,
        SFut: Future<Output = Result<CustomerSessionClientSecret, ProviderError>> + Send + 'static,
    {
        Self {
            intent_configuration: Arc::new(move || intent_configuration().boxed()),
            client_secret: Arc::new(move || client_secret().boxed()),
        }
    }
}

#[async_trait]
impl IntentConfigurationProvider for CallbackCustomerSessionProvider {
    async fn intent_configuration(&self) -> Result<IntentConfiguration, ProviderError> {
        (self.intent_configuration)().await
    }
}

#[async_trait]
impl SessionSecretProvider for CallbackCustomerSessionProvider {
    async fn customer_session_client_secret(
        &self,
    ) -> Result<CustomerSessionClientSecret, ProviderError> {
        (self.client_secret)().await
    }
}
