//! Checkout state machine states.

use serde::{Deserialize, Serialize};

/// State of a checkout attempt.
///
/// ```text
/// Idle -> CreatingOrder -> PaymentLoading -> PaymentReady -> Processing -> Success
///            |                  |                ^              |
///            v (backend error)  v (init error)   +-- (user      v (provider error)
///           Idle               Failed                cancelled) Failed
///
/// any non-idle, non-success state -> Cancelling -> Idle
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "state", content = "detail")]
pub enum CheckoutState {
    /// No checkout running.
    #[default]
    Idle,
    /// Backend order creation in flight.
    CreatingOrder,
    /// Payment session initialization in flight.
    PaymentLoading,
    /// Payment sheet can be presented; a pending payment exists.
    PaymentReady,
    /// Payment sheet open, awaiting the provider's verdict.
    Processing,
    /// Payment settled; the cart has been cleared.
    Success,
    /// A retryable failure occurred. The message is user-facing.
    Failed { message: String },
    /// Best-effort backend order cancellation in flight.
    Cancelling,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "idle",
            CheckoutState::CreatingOrder => "creating_order",
            CheckoutState::PaymentLoading => "payment_loading",
            CheckoutState::PaymentReady => "payment_ready",
            CheckoutState::Processing => "processing",
            CheckoutState::Success => "success",
            CheckoutState::Failed { .. } => "failed",
            CheckoutState::Cancelling => "cancelling",
        }
    }

    /// Check if a new checkout may start.
    pub fn can_begin(&self) -> bool {
        matches!(self, CheckoutState::Idle)
    }

    /// Check if the user may cancel out of the flow.
    pub fn can_cancel(&self) -> bool {
        !matches!(self, CheckoutState::Idle | CheckoutState::Success)
    }

    /// User-facing failure message, if any.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            CheckoutState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Verdict of presenting the payment sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Charge completed; checkout reached `Success`.
    Completed,
    /// User dismissed the sheet; back at `PaymentReady`, no error to show.
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_idle_can_begin() {
        assert!(CheckoutState::Idle.can_begin());
        assert!(!CheckoutState::PaymentReady.can_begin());
        assert!(!CheckoutState::Success.can_begin());
        assert!(!CheckoutState::Failed {
            message: "x".into()
        }
        .can_begin());
    }

    #[test]
    fn test_cancel_excludes_idle_and_success() {
        assert!(!CheckoutState::Idle.can_cancel());
        assert!(!CheckoutState::Success.can_cancel());
        assert!(CheckoutState::CreatingOrder.can_cancel());
        assert!(CheckoutState::PaymentReady.can_cancel());
        assert!(CheckoutState::Processing.can_cancel());
        assert!(CheckoutState::Failed {
            message: "x".into()
        }
        .can_cancel());
    }

    #[test]
    fn test_failure_message() {
        let state = CheckoutState::Failed {
            message: "card declined".into(),
        };
        assert_eq!(state.failure_message(), Some("card declined"));
        assert_eq!(CheckoutState::Idle.failure_message(), None);
    }
}
