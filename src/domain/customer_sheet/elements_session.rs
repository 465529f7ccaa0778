//! Elements session payload and the request used to fetch it.
//!
//! Only the fields the customer sheet inspects are modelled; everything else
//! in the server response is ignored on deserialization.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::CustomerId;

use super::{CachedEphemeralKey, CustomerSessionClientSecret, InitializationMode};

/// Server-composed description of a checkout session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementsSession {
    /// Session id, when the server assigns one.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "livemode", default)]
    pub is_live_mode: bool,

    /// Payment method types the session can offer.
    #[serde(default)]
    pub payment_method_types: Vec<String>,

    /// Customer context; absent when no customer session was attached.
    #[serde(default)]
    pub customer: Option<ElementsSessionCustomer>,
}

impl ElementsSession {
    pub fn new<I, S>(payment_method_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            payment_method_types: payment_method_types.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_customer(mut self, customer: ElementsSessionCustomer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn customer_session(&self) -> Option<&CustomerSession> {
        self.customer.as_ref().map(|customer| &customer.session)
    }

    /// Ephemeral key carried by the customer session block, if any.
    pub fn ephemeral_key(&self) -> Option<CachedEphemeralKey> {
        self.customer_session().map(CachedEphemeralKey::from)
    }
}

/// Customer block of an elements session.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementsSessionCustomer {
    #[serde(rename = "customer_session")]
    pub session: CustomerSession,

    #[serde(default)]
    pub payment_methods: Vec<SavedPaymentMethod>,

    #[serde(default)]
    pub default_payment_method: Option<String>,
}

impl ElementsSessionCustomer {
    pub fn new(session: CustomerSession) -> Self {
        Self {
            session,
            payment_methods: Vec::new(),
            default_payment_method: None,
        }
    }
}

/// Customer session granted by the server, including its ephemeral key.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSession {
    pub id: String,

    #[serde(rename = "livemode", default)]
    pub live_mode: bool,

    pub api_key: SecretString,

    /// Expiry of `api_key`, Unix seconds.
    pub api_key_expiry: i64,

    #[serde(rename = "customer")]
    pub customer_id: CustomerId,
}

impl CustomerSession {
    pub fn new(
        id: impl Into<String>,
        customer_id: CustomerId,
        api_key: impl Into<String>,
        api_key_expiry: i64,
    ) -> Self {
        Self {
            id: id.into(),
            live_mode: false,
            api_key: SecretString::new(api_key.into()),
            api_key_expiry,
            customer_id,
        }
    }
}

/// A payment method already attached to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SavedPaymentMethod {
    pub id: String,

    #[serde(rename = "type")]
    pub payment_method_type: String,
}

/// Customer the session is created for.
#[derive(Debug, Clone)]
pub enum CustomerConfiguration {
    /// Customer authenticated through a customer session client secret.
    CustomerSession {
        id: CustomerId,
        client_secret: SecretString,
    },
}

impl CustomerConfiguration {
    pub fn with_customer_session(secret: CustomerSessionClientSecret) -> Self {
        let (id, client_secret) = secret.into_parts();
        CustomerConfiguration::CustomerSession { id, client_secret }
    }

    pub fn customer_id(&self) -> &CustomerId {
        match self {
            CustomerConfiguration::CustomerSession { id, .. } => id,
        }
    }

    pub fn client_secret(&self) -> &str {
        match self {
            CustomerConfiguration::CustomerSession { client_secret, .. } => {
                client_secret.expose_secret()
            }
        }
    }
}

/// Everything the remote fetcher needs to load an elements session.
#[derive(Debug, Clone)]
pub struct ElementsSessionRequest {
    pub initialization_mode: InitializationMode,

    /// Saved payment method to surface as the default, if known.
    pub default_payment_method_id: Option<String>,

    pub customer: CustomerConfiguration,

    /// External payment method identifiers; always empty for the customer sheet.
    pub external_payment_methods: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    const SESSION_JSON: &str = r#"{
        "id": "elements_session_1",
        "livemode": false,
        "payment_method_types": ["card", "mobilepay"],
        "unrelated_field": {"ignored": true},
        "customer": {
            "payment_methods": [{"id": "pm_1", "type": "card", "card": {"last4": "4242"}}],
            "default_payment_method": "pm_1",
            "customer_session": {
                "id": "cuss_1",
                "livemode": false,
                "api_key": "ek_test_1",
                "api_key_expiry": 1000,
                "customer": "cus_1",
                "components": {}
            }
        }
    }"#;

    #[test]
    fn deserializes_customer_session_block() {
        let session: ElementsSession = serde_json::from_str(SESSION_JSON).unwrap();

        assert_eq!(session.payment_method_types, vec!["card", "mobilepay"]);
        let customer = session.customer.as_ref().unwrap();
        assert_eq!(customer.default_payment_method.as_deref(), Some("pm_1"));
        assert_eq!(customer.payment_methods[0].payment_method_type, "card");

        let key = session.ephemeral_key().unwrap();
        assert_eq!(key.customer_id().as_str(), "cus_1");
        assert_eq!(key.ephemeral_key(), "ek_test_1");
        assert_eq!(key.expires_at(), Timestamp::from_unix_secs(1000));
    }

    #[test]
    fn missing_customer_yields_no_key() {
        let session: ElementsSession =
            serde_json::from_str(r#"{"payment_method_types": ["card"]}"#).unwrap();

        assert!(session.customer_session().is_none());
        assert!(session.ephemeral_key().is_none());
    }

    #[test]
    fn debug_does_not_leak_api_key() {
        let session: ElementsSession = serde_json::from_str(SESSION_JSON).unwrap();
        assert!(!format!("{:?}", session).contains("ek_test_1"));
    }

    #[test]
    fn customer_configuration_from_client_secret() {
        let secret =
            CustomerSessionClientSecret::new(CustomerId::new("cus_9").unwrap(), "cuss_secret_9");
        let customer = CustomerConfiguration::with_customer_session(secret);

        assert_eq!(customer.customer_id().as_str(), "cus_9");
        assert_eq!(customer.client_secret(), "cuss_secret_9");
    }
}
