//! Checkout and payment flow for the LastCall clients.
//!
//! This crate drives a cart through backend order creation and a
//! third-party payment provider to a terminal state:
//!
//! - `CheckoutEngine` - the state machine (begin / confirm / cancel)
//! - `CheckoutState` - its observable states, for UI binding
//! - `PaymentProvider` - the provider SDK seam
//! - `PendingPayment` - the order/payment-session linkage
//!
//! # Example
//!
//! ```rust,ignore
//! use lastcall_checkout::{CheckoutEngine, PaymentOutcome};
//!
//! let mut engine = CheckoutEngine::new(backend, provider, cart.clone());
//! let pending = engine.begin().await?;
//! match engine.confirm().await? {
//!     PaymentOutcome::Completed => navigate_to_order_screen(),
//!     PaymentOutcome::Cancelled => {} // sheet dismissed, nothing to show
//! }
//! ```

mod engine;
mod error;
mod pending;
mod provider;
mod state;

pub use engine::CheckoutEngine;
pub use error::CheckoutError;
pub use pending::PendingPayment;
pub use provider::{PaymentProvider, ProviderError};
pub use state::{CheckoutState, PaymentOutcome};
