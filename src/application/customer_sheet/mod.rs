//! Customer sheet application services.
//!
//! The session manager coordinates the merchant providers, the saved
//! selection store and the remote elements session fetch, and caches the
//! customer ephemeral key between fetches.

mod errors;
mod manager;

pub use errors::SessionError;
pub use manager::{
    CustomerSessionElementsSessionManager, DefaultCustomerSessionElementsSessionManager,
};
