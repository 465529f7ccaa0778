//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `customer_sheet` - Ephemeral key cache entity, intent configuration and
//!   elements session payload

pub mod customer_sheet;
pub mod foundation;
