//! Merchant provider adapters.
//!
//! Implementations of `IntentConfigurationProvider` and
//! `SessionSecretProvider`. Both ports are usually served by one merchant
//! object, so each adapter implements both.
//!
//! ## Available Adapters
//!
//! - `CallbackCustomerSessionProvider` - Wraps merchant async callbacks
//! - `MockCustomerSessionProvider` - Call tracking and error injection for tests

mod callback;
mod mock;

pub use callback::CallbackCustomerSessionProvider;
pub use mock::MockCustomerSessionProvider;
