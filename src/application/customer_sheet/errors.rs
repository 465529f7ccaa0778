//! Errors surfaced by the customer sheet session manager.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ProviderError;

/// Failure of a session manager operation.
///
/// Upstream failures carry the collaborator's error unchanged; the variant
/// records which collaborator failed.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Failed to resolve intent configuration: {0}")]
    IntentConfiguration(#[source] ProviderError),

    #[error("Failed to resolve customer session client secret: {0}")]
    CustomerSessionSecret(#[source] ProviderError),

    #[error("Failed to fetch elements session: {0}")]
    ElementsSession(#[source] ProviderError),

    /// The session fetch succeeded but carried no customer session, so there
    /// is no ephemeral key to hand out.
    #[error("No ephemeral key available")]
    NoEphemeralKey,

    /// A collaborator reported that the request was abandoned.
    #[error("Request cancelled: {0}")]
    Cancelled(#[source] ProviderError),
}

impl SessionError {
    pub(crate) fn intent_configuration(err: ProviderError) -> Self {
        if err.is_cancelled() {
            return SessionError::Cancelled(err);
        }
        SessionError::IntentConfiguration(err)
    }

    pub(crate) fn customer_session_secret(err: ProviderError) -> Self {
        if err.is_cancelled() {
            return SessionError::Cancelled(err);
        }
        SessionError::CustomerSessionSecret(err)
    }

    pub(crate) fn elements_session(err: ProviderError) -> Self {
        if err.is_cancelled() {
            return SessionError::Cancelled(err);
        }
        SessionError::ElementsSession(err)
    }

    /// Whether a collaborator failed, as opposed to a broken response.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            SessionError::IntentConfiguration(_)
                | SessionError::CustomerSessionSecret(_)
                | SessionError::ElementsSession(_)
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SessionError::Cancelled(_))
    }

    /// Whether trying again may help. The manager never retries by itself.
    pub fn is_retryable(&self) -> bool {
        match self {
            SessionError::IntentConfiguration(err)
            | SessionError::CustomerSessionSecret(err)
            | SessionError::ElementsSession(err) => err.retryable,
            SessionError::Cancelled(_) => true,
            SessionError::NoEphemeralKey => false,
        }
    }

    /// The collaborator error behind this failure, if any.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            SessionError::IntentConfiguration(err)
            | SessionError::CustomerSessionSecret(err)
            | SessionError::ElementsSession(err)
            | SessionError::Cancelled(err) => Some(err),
            SessionError::NoEphemeralKey => None,
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        let code = match &err {
            SessionError::NoEphemeralKey => ErrorCode::InvalidState,
            SessionError::Cancelled(_) => ErrorCode::Cancelled,
            _ => ErrorCode::ExternalServiceError,
        };

        let domain_error = DomainError::new(code, err.to_string());
        match err.provider_error() {
            Some(provider_error) => {
                domain_error.with_detail("provider_code", provider_error.code.to_string())
            }
            None => domain_error,
        }
    }
}
