//! Elements session repository adapters.
//!
//! The production client lives with the host application's API layer; this
//! crate ships the test double used by its own tests and demos.

mod mock;

pub use mock::MockElementsSessionRepository;
