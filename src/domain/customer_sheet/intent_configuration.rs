//! Merchant intent configuration and the initialization mode built from it.

use serde::{Deserialize, Serialize};

/// Merchant-supplied configuration for the customer sheet.
///
/// Fetched once per manager and reused for every session request afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentConfiguration {
    /// Payment method types the sheet may offer (e.g. `card`, `mobilepay`).
    ///
    /// Empty means the server picks from the account's enabled methods.
    #[serde(default)]
    pub payment_method_types: Vec<String>,
}

impl IntentConfiguration {
    /// Builds a configuration, dropping blank and repeated types while
    /// keeping the merchant's ordering.
    pub fn new<I, S>(payment_method_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut types: Vec<String> = Vec::new();
        for pm_type in payment_method_types {
            let pm_type = pm_type.into().trim().to_string();
            if !pm_type.is_empty() && !types.contains(&pm_type) {
                types.push(pm_type);
            }
        }
        Self {
            payment_method_types: types,
        }
    }
}

/// When a setup intent will reuse the saved payment method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupFutureUsage {
    #[default]
    OffSession,
    OnSession,
}

/// Mode of a deferred intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IntentMode {
    /// Save a payment method for later without charging it.
    Setup {
        currency: Option<String>,
        setup_future_usage: SetupFutureUsage,
    },
}

impl IntentMode {
    /// Setup mode with no currency and off-session reuse.
    pub fn setup() -> Self {
        IntentMode::Setup {
            currency: None,
            setup_future_usage: SetupFutureUsage::OffSession,
        }
    }
}

/// Intent description sent with a deferred session request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredIntentConfiguration {
    pub mode: IntentMode,
    pub payment_method_types: Vec<String>,
}

/// How the elements session is initialized.
///
/// The customer sheet never has a confirmed intent up front, so it always
/// uses a deferred setup intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InitializationMode {
    DeferredIntent {
        intent_configuration: DeferredIntentConfiguration,
    },
}

impl InitializationMode {
    /// Deferred setup intent limited to the configuration's payment method types.
    pub fn deferred_setup(configuration: &IntentConfiguration) -> Self {
        InitializationMode::DeferredIntent {
            intent_configuration: DeferredIntentConfiguration {
                mode: IntentMode::setup(),
                payment_method_types: configuration.payment_method_types.clone(),
            },
        }
    }

    pub fn payment_method_types(&self) -> &[String] {
        match self {
            InitializationMode::DeferredIntent {
                intent_configuration,
            } => &intent_configuration.payment_method_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drops_blank_and_duplicate_types() {
        let config = IntentConfiguration::new(["card", " mobilepay ", "", "card"]);
        assert_eq!(config.payment_method_types, vec!["card", "mobilepay"]);
    }

    #[test]
    fn deferred_setup_carries_payment_method_types() {
        let config = IntentConfiguration::new(["card", "mobilepay"]);
        let mode = InitializationMode::deferred_setup(&config);

        assert_eq!(mode.payment_method_types(), ["card", "mobilepay"]);
        match mode {
            InitializationMode::DeferredIntent {
                intent_configuration,
            } => assert_eq!(intent_configuration.mode, IntentMode::setup()),
        }
    }

    #[test]
    fn initialization_mode_serializes_with_tags() {
        let mode = InitializationMode::deferred_setup(&IntentConfiguration::new(["card"]));
        let json = serde_json::to_value(&mode).unwrap();

        assert_eq!(json["type"], "deferred_intent");
        assert_eq!(json["intent_configuration"]["mode"]["mode"], "setup");
        assert_eq!(
            json["intent_configuration"]["mode"]["setup_future_usage"],
            "off_session"
        );
    }

    #[test]
    fn intent_configuration_defaults_types_when_missing() {
        let config: IntentConfiguration = serde_json::from_str("{}").unwrap();
        assert!(config.payment_method_types.is_empty());
    }
}
