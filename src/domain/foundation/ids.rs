//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Customer identifier issued by the payments API (`cus_...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

impl CustomerId {
    /// Creates a new CustomerId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("customer_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CustomerId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CustomerId> for String {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_rejects_empty() {
        assert!(CustomerId::new("").is_err());
        assert!(CustomerId::new("   ").is_err());
    }

    #[test]
    fn customer_id_displays_inner_value() {
        let id = CustomerId::new("cus_123").unwrap();
        assert_eq!(id.to_string(), "cus_123");
        assert_eq!(id.as_str(), "cus_123");
    }

    #[test]
    fn customer_id_serializes_as_plain_string() {
        let id = CustomerId::new("cus_123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cus_123\"");
    }

    #[test]
    fn customer_id_deserialization_validates() {
        let id: CustomerId = serde_json::from_str("\"cus_123\"").unwrap();
        assert_eq!(id.as_str(), "cus_123");
        assert!(serde_json::from_str::<CustomerId>("\"\"").is_err());
    }
}
