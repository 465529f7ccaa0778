//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the customer sheet core and the outside world. Adapters implement these
//! ports.
//!
//! ## Merchant Ports
//!
//! - `IntentConfigurationProvider` - Merchant intent configuration (memoized by callers)
//! - `SessionSecretProvider` - Customer session client secret (fresh per fetch)
//!
//! ## Infrastructure Ports
//!
//! - `ElementsSessionRepository` - Remote elements session fetch
//! - `SelectionStore` - Saved payment option per customer
//! - `Clock` - Current time for expiry checks

mod clock;
mod customer_session_provider;
mod elements_session_repository;
mod provider_error;
mod selection_store;

pub use clock::Clock;
pub use customer_session_provider::{IntentConfigurationProvider, SessionSecretProvider};
pub use elements_session_repository::ElementsSessionRepository;
pub use provider_error::{ProviderError, ProviderErrorCode};
pub use selection_store::SelectionStore;
