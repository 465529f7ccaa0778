//! Application layer - services that orchestrate domain types through ports.

pub mod customer_sheet;

pub use customer_sheet::{
    CustomerSessionElementsSessionManager, DefaultCustomerSessionElementsSessionManager,
    SessionError,
};
