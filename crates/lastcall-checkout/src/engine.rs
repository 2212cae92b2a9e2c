//! Checkout engine.
//!
//! Drives a cart snapshot through backend order creation and the payment
//! provider to a terminal state, exactly once per attempt. The engine gets
//! its collaborators handed in at construction; nothing is reached through
//! ambient state.

use crate::error::CheckoutError;
use crate::pending::PendingPayment;
use crate::provider::{PaymentProvider, ProviderError};
use crate::state::{CheckoutState, PaymentOutcome};
use lastcall_api::{CreateOrderRequest, MarketBackend};
use lastcall_commerce::cart::SharedCart;
use lastcall_commerce::order::Order;
use std::sync::Arc;

/// Reason sent with best-effort order cancellation.
const CANCEL_REASON: &str = "checkout abandoned";

/// The checkout/payment state machine.
///
/// One engine instance serves one cart session. Exclusive access (`&mut`)
/// plus the `Idle`-only entry guard enforce that at most one pending
/// payment exists at a time.
pub struct CheckoutEngine {
    backend: Arc<dyn MarketBackend>,
    provider: Arc<dyn PaymentProvider>,
    cart: SharedCart,
    state: CheckoutState,
    order: Option<Order>,
    pending: Option<PendingPayment>,
}

impl CheckoutEngine {
    /// Create an engine for a cart session.
    pub fn new(
        backend: Arc<dyn MarketBackend>,
        provider: Arc<dyn PaymentProvider>,
        cart: SharedCart,
    ) -> Self {
        Self {
            backend,
            provider,
            cart,
            state: CheckoutState::Idle,
            order: None,
            pending: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The active pending payment, if the flow has reached `PaymentReady`.
    pub fn pending(&self) -> Option<&PendingPayment> {
        self.pending.as_ref()
    }

    /// Start a checkout attempt for the current cart contents.
    ///
    /// An empty cart is a validation error: no state transition, no network
    /// call. The order is created for the first cart line only, because the
    /// backend accepts a single offer per order.
    ///
    /// On success the engine is at `PaymentReady` and the returned pending
    /// payment carries the charge amount in minor units. Order-creation
    /// failure returns the engine to `Idle`; payment-initialization failure
    /// parks it at `Failed`, retryable via [`retry_payment_init`].
    ///
    /// [`retry_payment_init`]: CheckoutEngine::retry_payment_init
    pub async fn begin(&mut self) -> Result<PendingPayment, CheckoutError> {
        if !self.state.can_begin() {
            return Err(CheckoutError::InProgress(self.state.as_str().to_string()));
        }

        let snapshot = self.cart.snapshot();
        let first = match snapshot.first() {
            Some(line) => line.clone(),
            None => return Err(CheckoutError::EmptyCart),
        };

        self.state = CheckoutState::CreatingOrder;
        tracing::debug!(offer = %first.offer.id, quantity = first.quantity, "creating order");
        let request = CreateOrderRequest {
            offer_id: first.offer.id.clone(),
            quantity: first.quantity,
        };
        match self.backend.create_order(&request).await {
            Ok(order) => {
                self.order = Some(order);
            }
            Err(e) => {
                // Retryable: the user may tap checkout again.
                self.state = CheckoutState::Idle;
                return Err(e.into());
            }
        }

        self.init_payment().await
    }

    /// Re-run payment-session initialization after it failed.
    pub async fn retry_payment_init(&mut self) -> Result<PendingPayment, CheckoutError> {
        if !matches!(self.state, CheckoutState::Failed { .. }) || self.order.is_none() {
            return Err(self.invalid("retry payment initialization"));
        }
        self.init_payment().await
    }

    async fn init_payment(&mut self) -> Result<PendingPayment, CheckoutError> {
        let order = match &self.order {
            Some(order) => order.clone(),
            None => return Err(self.invalid("initialize payment")),
        };

        self.state = CheckoutState::PaymentLoading;
        match self.backend.create_payment_intent(&order.id).await {
            Ok(intent) => {
                let pending = PendingPayment {
                    order_id: order.id.clone(),
                    payment_intent_id: intent.payment_intent_id,
                    client_secret: intent.client_secret,
                    amount: order.total,
                };
                self.pending = Some(pending.clone());
                self.state = CheckoutState::PaymentReady;
                Ok(pending)
            }
            Err(e) => {
                self.state = CheckoutState::Failed {
                    message: e.to_string(),
                };
                Err(e.into())
            }
        }
    }

    /// Present the payment sheet and settle the attempt.
    ///
    /// Effects on completion, in order: transition to `Success`, clear the
    /// cart, discard the pending payment. The caller navigates away.
    ///
    /// User cancellation is not an error: the engine returns to
    /// `PaymentReady` and reports [`PaymentOutcome::Cancelled`] so the UI
    /// shows nothing.
    pub async fn confirm(&mut self) -> Result<PaymentOutcome, CheckoutError> {
        let pending = match (&self.state, &self.pending) {
            (CheckoutState::PaymentReady, Some(pending)) => pending.clone(),
            _ => return Err(self.invalid("confirm payment")),
        };

        self.state = CheckoutState::Processing;
        match self.provider.confirm_payment(&pending).await {
            Ok(()) => {
                self.state = CheckoutState::Success;
                self.cart.clear();
                self.pending = None;
                self.order = None;
                tracing::debug!(order = %pending.order_id, "payment settled");
                Ok(PaymentOutcome::Completed)
            }
            Err(ProviderError::Cancelled) => {
                self.state = CheckoutState::PaymentReady;
                Ok(PaymentOutcome::Cancelled)
            }
            Err(ProviderError::Failed(message)) => {
                self.state = CheckoutState::Failed {
                    message: message.clone(),
                };
                Err(CheckoutError::Payment(message))
            }
        }
    }

    /// Abandon the checkout attempt.
    ///
    /// Attempts to cancel the backend order once; a failure there is logged
    /// and swallowed, since the order may already have expired server-side.
    /// The cart is left untouched — checkout only consumes it on success.
    pub async fn cancel(&mut self) -> Result<(), CheckoutError> {
        if !self.state.can_cancel() {
            return Err(self.invalid("cancel"));
        }

        self.state = CheckoutState::Cancelling;
        if let Some(order) = self.order.take() {
            if let Err(e) = self.backend.cancel_order(&order.id, Some(CANCEL_REASON)).await {
                tracing::warn!(order = %order.id, error = %e, "order cancellation failed");
            }
        }
        self.pending = None;
        self.state = CheckoutState::Idle;
        Ok(())
    }

    /// Acknowledge a completed checkout, returning the engine to `Idle`.
    pub fn reset(&mut self) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::Success {
            return Err(self.invalid("reset"));
        }
        self.state = CheckoutState::Idle;
        Ok(())
    }

    fn invalid(&self, operation: &str) -> CheckoutError {
        CheckoutError::InvalidState {
            state: self.state.as_str().to_string(),
            operation: operation.to_string(),
        }
    }
}
