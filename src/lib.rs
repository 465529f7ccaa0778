//! Customer Sheet Session - ephemeral key and elements session management
//! for the customer payment sheet.
//!
//! The sheet needs a customer ephemeral key to list and edit saved payment
//! methods. Keys come from elements sessions fetched with a customer session
//! client secret; this crate caches the key until it expires and fetches a
//! new session only when needed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
