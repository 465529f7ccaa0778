//! Session manager configuration

use serde::Deserialize;

/// Behaviour switches for the customer sheet session manager
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Share one in-flight elements session fetch between concurrent callers.
    ///
    /// Off by default: every caller performs its own round trip.
    #[serde(default)]
    pub deduplicate_in_flight: bool,
}

impl SessionConfig {
    /// Configuration with in-flight deduplication enabled
    pub fn deduplicated() -> Self {
        Self {
            deduplicate_in_flight: true,
        }
    }
}
