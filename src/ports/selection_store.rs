//! Persistence of a customer's last payment option choice.

use async_trait::async_trait;

use crate::domain::customer_sheet::{SavedSelection, SelectionFlags};
use crate::domain::foundation::CustomerId;

/// Per-customer store of saved selections.
///
/// Storage failures are the store's concern: a selection that cannot be read
/// is reported as absent.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// Read the saved selection for a customer.
    ///
    /// `flags` tells the store which wallets are currently available, so it
    /// can discard wallet selections that cannot be honoured.
    async fn saved_selection(
        &self,
        customer_id: &CustomerId,
        flags: SelectionFlags,
    ) -> Option<SavedSelection>;

    /// Persist (or clear, with `None`) the selection for a customer.
    async fn set_saved_selection(&self, customer_id: &CustomerId, selection: Option<SavedSelection>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SelectionStore) {}
    }
}
