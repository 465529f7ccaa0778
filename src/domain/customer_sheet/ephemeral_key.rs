//! Cached customer ephemeral key and its refresh policy.
//!
//! An ephemeral key scopes API access to one customer for a short window. The
//! manager keeps at most one of them and decides on every read whether it is
//! still usable.
//!
//! ```text
//! None --[successful fetch with customer session]--> Available
//! Available --[later successful fetch]--> Available (replaced)
//! ```

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{CustomerId, Timestamp};

use super::CustomerSession;

/// A usable ephemeral key together with the customer it belongs to.
#[derive(Clone)]
pub struct CachedEphemeralKey {
    customer_id: CustomerId,
    ephemeral_key: SecretString,
    expires_at: Timestamp,
}

impl CachedEphemeralKey {
    pub fn new(
        customer_id: CustomerId,
        ephemeral_key: impl Into<String>,
        expires_at: Timestamp,
    ) -> Self {
        Self {
            customer_id,
            ephemeral_key: SecretString::new(ephemeral_key.into()),
            expires_at,
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Raw key material, for handing to the API client.
    pub fn ephemeral_key(&self) -> &str {
        self.ephemeral_key.expose_secret()
    }

    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    /// True once `now` has reached the expiry instant.
    ///
    /// There is no early-refresh margin: a key is served right up to its
    /// expiry and refreshed from that instant on.
    pub fn should_refresh(&self, now: Timestamp) -> bool {
        now.is_at_or_after(&self.expires_at)
    }
}

impl From<&CustomerSession> for CachedEphemeralKey {
    fn from(session: &CustomerSession) -> Self {
        Self {
            customer_id: session.customer_id.clone(),
            ephemeral_key: session.api_key.clone(),
            expires_at: Timestamp::from_unix_secs(session.api_key_expiry),
        }
    }
}

impl fmt::Debug for CachedEphemeralKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedEphemeralKey")
            .field("customer_id", &self.customer_id)
            .field("ephemeral_key", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Cache slot for the customer ephemeral key.
#[derive(Debug, Clone, Default)]
pub enum CachedCustomerEphemeralKey {
    /// Nothing has been cached yet.
    #[default]
    None,

    /// Key taken from the most recent session response that carried one.
    Available(CachedEphemeralKey),
}

impl CachedCustomerEphemeralKey {
    /// Whether a new key must be fetched before one can be served.
    pub fn should_refresh(&self, now: Timestamp) -> bool {
        match self {
            CachedCustomerEphemeralKey::None => true,
            CachedCustomerEphemeralKey::Available(key) => key.should_refresh(now),
        }
    }

    /// The cached key if one is present, regardless of freshness.
    pub fn available(&self) -> Option<&CachedEphemeralKey> {
        match self {
            CachedCustomerEphemeralKey::None => None,
            CachedCustomerEphemeralKey::Available(key) => Some(key),
        }
    }

    /// The cached key only if it can be served at `now`.
    pub fn fresh(&self, now: Timestamp) -> Option<&CachedEphemeralKey> {
        self.available().filter(|key| !key.should_refresh(now))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, CachedCustomerEphemeralKey::Available(_))
    }
}

impl From<CachedEphemeralKey> for CachedCustomerEphemeralKey {
    fn from(key: CachedEphemeralKey) -> Self {
        CachedCustomerEphemeralKey::Available(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn key_expiring_at(secs: i64) -> CachedEphemeralKey {
        CachedEphemeralKey::new(
            CustomerId::new("cus_1").unwrap(),
            "ek_1",
            Timestamp::from_unix_secs(secs),
        )
    }

    #[test]
    fn none_always_needs_refresh() {
        let cached = CachedCustomerEphemeralKey::None;
        assert!(cached.should_refresh(Timestamp::from_unix_secs(0)));
        assert!(cached.should_refresh(Timestamp::now()));
    }

    #[test]
    fn available_refreshes_exactly_at_expiry() {
        let cached = CachedCustomerEphemeralKey::from(key_expiring_at(1000));

        assert!(!cached.should_refresh(Timestamp::from_unix_secs(999)));
        assert!(cached.should_refresh(Timestamp::from_unix_secs(1000)));
        assert!(cached.should_refresh(Timestamp::from_unix_secs(1001)));
    }

    #[test]
    fn fresh_filters_expired_keys() {
        let cached = CachedCustomerEphemeralKey::from(key_expiring_at(1000));

        assert!(cached.fresh(Timestamp::from_unix_secs(500)).is_some());
        assert!(cached.fresh(Timestamp::from_unix_secs(1000)).is_none());
        assert!(cached.available().is_some());
    }

    #[test]
    fn default_is_none() {
        assert!(!CachedCustomerEphemeralKey::default().is_available());
    }

    #[test]
    fn debug_output_redacts_key_material() {
        let key = CachedEphemeralKey::new(
            CustomerId::new("cus_1").unwrap(),
            "ek_live_supersecret",
            Timestamp::from_unix_secs(1000),
        );

        let debug = format!("{:?}", key);
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("cus_1"));
        assert_eq!(key.ephemeral_key(), "ek_live_supersecret");
    }

    proptest! {
        #[test]
        fn available_is_fresh_strictly_before_expiry(
            expiry in -1_000_000_000i64..4_000_000_000i64,
            offset in 1i64..1_000_000i64,
        ) {
            let cached = CachedCustomerEphemeralKey::from(key_expiring_at(expiry));
            prop_assert!(!cached.should_refresh(Timestamp::from_unix_secs(expiry - offset)));
        }

        #[test]
        fn available_is_stale_at_or_after_expiry(
            expiry in -1_000_000_000i64..4_000_000_000i64,
            offset in 0i64..1_000_000i64,
        ) {
            let cached = CachedCustomerEphemeralKey::from(key_expiring_at(expiry));
            prop_assert!(cached.should_refresh(Timestamp::from_unix_secs(expiry + offset)));
        }

        #[test]
        fn none_is_stale_at_any_time(now in -1_000_000_000i64..4_000_000_000i64) {
            prop_assert!(CachedCustomerEphemeralKey::None.should_refresh(Timestamp::from_unix_secs(now)));
        }
    }
}
