//! Selection store adapters.
//!
//! ## Available Adapters
//!
//! - `InMemorySelectionStore` - In-memory for testing and single-process apps

mod in_memory;

pub use in_memory::InMemorySelectionStore;
