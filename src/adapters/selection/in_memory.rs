//! In-memory selection store.
//!
//! Selections are keyed by `customer[<id>]`, the same key a persistent
//! preferences store would use, so several customers can share one store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::customer_sheet::{selection_key, SavedSelection, SelectionFlags};
use crate::domain::foundation::CustomerId;
use crate::ports::SelectionStore;

/// In-memory store of saved selections.
#[derive(Debug, Default, Clone)]
pub struct InMemorySelectionStore {
    selections: Arc<RwLock<HashMap<String, SavedSelection>>>,
}

impl InMemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of customers with a stored selection.
    pub async fn len(&self) -> usize {
        self.selections.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.selections.read().await.is_empty()
    }
}

#[async_trait]
impl SelectionStore for InMemorySelectionStore {
    async fn saved_selection(
        &self,
        customer_id: &CustomerId,
        flags: SelectionFlags,
    ) -> Option<SavedSelection> {
        let selections = self.selections.read().await;
        let selection = selections.get(&selection_key(customer_id))?;

        // Wallet selections are only honoured while the wallet is offered.
        match selection {
            SavedSelection::GooglePay if !flags.google_pay_available => None,
            SavedSelection::Link if !flags.link_available => None,
            SavedSelection::None => None,
            other => Some(other.clone()),
        }
    }

    async fn set_saved_selection(&self, customer_id: &CustomerId, selection: Option<SavedSelection>) {
        let key = selection_key(customer_id);
        let mut selections = self.selections.write().await;
        match selection {
            Some(selection) => {
                selections.insert(key, selection);
            }
            None => {
                selections.remove(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str) -> CustomerId {
        CustomerId::new(id).unwrap()
    }

    #[tokio::test]
    async fn returns_payment_method_selection() {
        let store = InMemorySelectionStore::new();
        store
            .set_saved_selection(&customer("cus_1"), Some(SavedSelection::payment_method("pm_1")))
            .await;

        let selection = store
            .saved_selection(&customer("cus_1"), SelectionFlags::no_wallets())
            .await;
        assert_eq!(selection, Some(SavedSelection::payment_method("pm_1")));
    }

    #[tokio::test]
    async fn selections_are_scoped_per_customer() {
        let store = InMemorySelectionStore::new();
        store
            .set_saved_selection(&customer("cus_1"), Some(SavedSelection::payment_method("pm_1")))
            .await;

        let other = store
            .saved_selection(&customer("cus_2"), SelectionFlags::no_wallets())
            .await;
        assert_eq!(other, None);
    }

    #[tokio::test]
    async fn wallet_selection_requires_wallet_availability() {
        let store = InMemorySelectionStore::new();
        store
            .set_saved_selection(&customer("cus_1"), Some(SavedSelection::GooglePay))
            .await;

        let hidden = store
            .saved_selection(&customer("cus_1"), SelectionFlags::no_wallets())
            .await;
        assert_eq!(hidden, None);

        let shown = store
            .saved_selection(
                &customer("cus_1"),
                SelectionFlags {
                    google_pay_available: true,
                    link_available: false,
                },
            )
            .await;
        assert_eq!(shown, Some(SavedSelection::GooglePay));
    }

    #[tokio::test]
    async fn clearing_removes_selection() {
        let store = InMemorySelectionStore::new();
        store
            .set_saved_selection(&customer("cus_1"), Some(SavedSelection::Link))
            .await;
        assert_eq!(store.len().await, 1);

        store.set_saved_selection(&customer("cus_1"), None).await;
        assert!(store.is_empty().await);
    }
}
