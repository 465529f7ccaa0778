//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the customer sheet core to external systems:
//! - `clock` - System and manually driven clocks
//! - `customer_session` - Merchant intent configuration / client secret providers
//! - `elements_session` - Elements session repository test double
//! - `selection` - Saved selection stores

pub mod clock;
pub mod customer_session;
pub mod elements_session;
pub mod selection;

pub use clock::{ManualClock, SystemClock};
pub use customer_session::{CallbackCustomerSessionProvider, MockCustomerSessionProvider};
pub use elements_session::MockElementsSessionRepository;
pub use selection::InMemorySelectionStore;
