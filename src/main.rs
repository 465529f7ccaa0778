//! Demo driver: wires the session manager to in-process adapters and walks
//! through a first fetch, a cached read and a refresh after expiry.
//!
//! Runs against test doubles only: a `ManualClock` so expiry can be reached
//! without waiting, and `MockElementsSessionRepository` in place of the
//! remote endpoint. A host application wires `SystemClock` and its own
//! `ElementsSessionRepository` instead.

use std::sync::Arc;

use customer_sheet_session::adapters::{
    CallbackCustomerSessionProvider, InMemorySelectionStore, ManualClock,
    MockElementsSessionRepository,
};
use customer_sheet_session::application::{
    CustomerSessionElementsSessionManager, DefaultCustomerSessionElementsSessionManager,
};
use customer_sheet_session::config::{init_tracing, AppConfig};
use customer_sheet_session::domain::customer_sheet::{
    CustomerSessionClientSecret, IntentConfiguration, SavedSelection,
};
use customer_sheet_session::domain::foundation::{CustomerId, Timestamp};
use customer_sheet_session::ports::{ProviderError, SelectionStore};

const KEY_LIFETIME_SECS: i64 = 1800;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    let customer_id = CustomerId::new("cus_demo")?;
    let now = Timestamp::now();
    let clock = Arc::new(ManualClock::at_unix_secs(now.as_unix_secs()));

    let selections = InMemorySelectionStore::new();
    selections
        .set_saved_selection(&customer_id, Some(SavedSelection::payment_method("pm_demo")))
        .await;

    let provider = Arc::new(CallbackCustomerSessionProvider::new(
        || async { Ok::<_, ProviderError>(IntentConfiguration::new(["card"])) },
        {
            let customer_id = customer_id.clone();
            move || {
                let customer_id = customer_id.clone();
                async move {
                    Ok::<_, ProviderError>(CustomerSessionClientSecret::new(
                        customer_id,
                        "cuss_demo_secret",
                    ))
                }
            }
        },
    ));

    let repository = MockElementsSessionRepository::new()
        .with_key_expiry(now.plus_secs(KEY_LIFETIME_SECS).as_unix_secs());

    let manager = DefaultCustomerSessionElementsSessionManager::new(
        Arc::new(repository.clone()),
        Arc::new(selections),
        provider.clone(),
        provider,
        clock.clone(),
    )
    .with_config(config.session.clone());

    let key = manager.fetch_customer_session_ephemeral_key().await?;
    tracing::info!(customer_id = %key.customer_id(), "First fetch: {:?}", key);

    let key = manager.fetch_customer_session_ephemeral_key().await?;
    tracing::info!(remote_calls = repository.call_count(), "Cached read: {:?}", key);

    clock.advance_secs(KEY_LIFETIME_SECS);
    let key = manager.fetch_customer_session_ephemeral_key().await?;
    tracing::info!(remote_calls = repository.call_count(), "After expiry: {:?}", key);

    Ok(())
}
