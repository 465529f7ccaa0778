//! A returning customer's last payment method choice.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CustomerId;

/// Previously persisted payment option for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SavedSelection {
    GooglePay,
    Link,
    PaymentMethod { id: String },
    None,
}

impl SavedSelection {
    pub fn payment_method(id: impl Into<String>) -> Self {
        SavedSelection::PaymentMethod { id: id.into() }
    }

    /// Id of the saved payment method, if this selection is one.
    ///
    /// Wallet selections yield `None`: they cannot be sent as a default
    /// payment method hint.
    pub fn payment_method_id(&self) -> Option<&str> {
        match self {
            SavedSelection::PaymentMethod { id } => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Wallet availability passed when reading a saved selection.
///
/// A store may downgrade a wallet selection to `None` when the wallet is
/// reported unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    pub google_pay_available: bool,
    pub link_available: bool,
}

impl SelectionFlags {
    /// Flags used by the customer sheet, which never offers wallets.
    pub fn no_wallets() -> Self {
        Self::default()
    }
}

/// Storage key under which a customer's selection is persisted.
pub fn selection_key(customer_id: &CustomerId) -> String {
    format!("customer[{}]", customer_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_payment_method_selection_has_id() {
        assert_eq!(
            SavedSelection::payment_method("pm_123").payment_method_id(),
            Some("pm_123")
        );
        assert_eq!(SavedSelection::GooglePay.payment_method_id(), None);
        assert_eq!(SavedSelection::Link.payment_method_id(), None);
        assert_eq!(SavedSelection::None.payment_method_id(), None);
    }

    #[test]
    fn selection_key_scopes_by_customer() {
        let customer_id = CustomerId::new("cus_1").unwrap();
        assert_eq!(selection_key(&customer_id), "customer[cus_1]");
    }

    #[test]
    fn saved_selection_serializes_tagged() {
        let json = serde_json::to_value(SavedSelection::payment_method("pm_1")).unwrap();
        assert_eq!(json["type"], "payment_method");
        assert_eq!(json["id"], "pm_1");

        let parsed: SavedSelection = serde_json::from_str(r#"{"type":"google_pay"}"#).unwrap();
        assert_eq!(parsed, SavedSelection::GooglePay);
    }
}
