//! Elements session port - the single network boundary of the customer sheet.

use async_trait::async_trait;

use crate::domain::customer_sheet::{ElementsSession, ElementsSessionRequest};

use super::ProviderError;

/// Loads an elements session from the payments API.
///
/// Implementations perform one network round trip per call and must not
/// retry on their own; retry decisions belong to the caller.
#[async_trait]
pub trait ElementsSessionRepository: Send + Sync {
    async fn get(&self, request: ElementsSessionRequest) -> Result<ElementsSession, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_session_repository_is_object_safe() {
        fn _accepts_dyn(_repository: &dyn ElementsSessionRepository) {}
    }
}
