//! Time source port.
//!
//! Expiry checks read the current time through this trait so that boundary
//! behavior can be tested with a controlled clock.

use crate::domain::foundation::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
