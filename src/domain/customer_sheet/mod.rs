//! Customer sheet domain - ephemeral keys, intent configuration, saved
//! selections and the elements session payload.
//!
//! These are plain data types and pure policies. Coordination with the
//! outside world lives in `application::customer_sheet`.

mod client_secret;
mod elements_session;
mod ephemeral_key;
mod intent_configuration;
mod saved_selection;

pub use client_secret::CustomerSessionClientSecret;
pub use elements_session::{
    CustomerConfiguration, CustomerSession, ElementsSession, ElementsSessionCustomer,
    ElementsSessionRequest, SavedPaymentMethod,
};
pub use ephemeral_key::{CachedCustomerEphemeralKey, CachedEphemeralKey};
pub use intent_configuration::{
    DeferredIntentConfiguration, InitializationMode, IntentConfiguration, IntentMode,
    SetupFutureUsage,
};
pub use saved_selection::{selection_key, SavedSelection, SelectionFlags};
