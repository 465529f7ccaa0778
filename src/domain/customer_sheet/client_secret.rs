//! Customer session client secret handed out by the merchant backend.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::CustomerId;

/// Customer id plus the customer session client secret for one fetch.
///
/// Secrets may rotate between fetches, so this is never cached.
#[derive(Clone)]
pub struct CustomerSessionClientSecret {
    customer_id: CustomerId,
    client_secret: SecretString,
}

impl CustomerSessionClientSecret {
    pub fn new(customer_id: CustomerId, client_secret: impl Into<String>) -> Self {
        Self {
            customer_id,
            client_secret: SecretString::new(client_secret.into()),
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }

    pub fn into_parts(self) -> (CustomerId, SecretString) {
        (self.customer_id, self.client_secret)
    }
}

impl fmt::Debug for CustomerSessionClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerSessionClientSecret")
            .field("customer_id", &self.customer_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_client_secret() {
        let secret =
            CustomerSessionClientSecret::new(CustomerId::new("cus_1").unwrap(), "cuss_secret_abc");

        let debug = format!("{:?}", secret);
        assert!(!debug.contains("cuss_secret_abc"));
        assert_eq!(secret.client_secret(), "cuss_secret_abc");
        assert_eq!(secret.customer_id().as_str(), "cus_1");
    }
}
