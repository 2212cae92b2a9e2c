//! Pending payment record.

use lastcall_commerce::ids::{OrderId, PaymentIntentId};
use lastcall_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// Transient linkage between a backend order and an in-progress payment
/// session.
///
/// Created when checkout begins; discarded when the payment succeeds (after
/// the cart is cleared) or when checkout is cancelled (after the
/// best-effort backend order cancellation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingPayment {
    /// The backend order being paid for.
    pub order_id: OrderId,
    /// Payment intent at the provider.
    pub payment_intent_id: PaymentIntentId,
    /// Secret handed to the provider SDK to present the payment sheet.
    pub client_secret: String,
    /// Amount to charge, in minor units.
    pub amount: Money,
}
