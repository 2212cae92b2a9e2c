//! Payment provider seam.

use crate::pending::PendingPayment;
use async_trait::async_trait;
use thiserror::Error;

/// Outcome of the provider's payment sheet, as an error type.
///
/// User cancellation is a distinct variant, not a failure: the flow returns
/// to `PaymentReady` silently and must not show an error dialog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The user dismissed the payment sheet before completing.
    #[error("payment cancelled by user")]
    Cancelled,

    /// The provider reported a genuine failure (declined card, expired
    /// session). The message is user-facing and the attempt is retryable.
    #[error("{0}")]
    Failed(String),
}

impl ProviderError {
    /// Check if this is the user-cancellation code.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ProviderError::Cancelled)
    }
}

/// The third-party payment SDK as the checkout engine sees it.
///
/// The concrete implementation wraps the provider's mobile SDK (payment
/// sheet presentation and confirmation); tests substitute a scripted
/// in-memory provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Present the payment sheet for an initialized session and wait for
    /// the user to complete or dismiss it.
    async fn confirm_payment(&self, pending: &PendingPayment) -> Result<(), ProviderError>;
}
