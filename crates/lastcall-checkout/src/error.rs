//! Checkout error types.

use lastcall_api::ApiError;
use thiserror::Error;

/// Errors surfaced by the checkout engine.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was started with nothing in the cart. No state transition
    /// and no network call happened.
    #[error("Cart is empty")]
    EmptyCart,

    /// A checkout attempt is already running; only one pending payment may
    /// exist at a time.
    #[error("Checkout already in progress (state: {0})")]
    InProgress(String),

    /// The requested operation is not valid in the current state.
    #[error("Cannot {operation} in state {state}")]
    InvalidState { state: String, operation: String },

    /// A backend call failed. Retryable from the user's point of view.
    #[error(transparent)]
    Backend(#[from] ApiError),

    /// The payment provider reported a genuine failure (not a user
    /// cancellation).
    #[error("Payment failed: {0}")]
    Payment(String),
}
