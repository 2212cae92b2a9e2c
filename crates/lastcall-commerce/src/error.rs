//! Domain error types.

use thiserror::Error;

/// Errors that can occur in marketplace domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid order status transition.
    #[error("Invalid order transition from {from} to {to}")]
    InvalidOrderTransition { from: String, to: String },

    /// Pickup token could not be parsed.
    #[error("Malformed pickup token: {0}")]
    MalformedPickupToken(String),

    /// Pickup token does not match the order.
    #[error("Pickup verification failed: {0}")]
    PickupVerificationFailed(String),
}
