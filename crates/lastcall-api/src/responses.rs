//! Response bodies of the backend API.

use crate::error::ApiError;
use lastcall_commerce::ids::{OfferId, OrderId, PaymentIntentId, StoreId, UserId};
use lastcall_commerce::money::{Currency, Money};
use lastcall_commerce::order::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// An order as the backend serializes it.
///
/// `totalPrice` is a decimal major-unit amount; `into_order` performs the
/// one conversion to integer minor units the core ever does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub offer_id: OfferId,
    pub store_id: StoreId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub quantity: i64,
    /// Total in major currency units, e.g. `29.99`.
    pub total_price: f64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub pickup_code: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub cancelled_at: Option<i64>,
}

impl OrderRecord {
    /// Convert to the domain order, rounding the total to minor units.
    pub fn into_order(self) -> Result<Order, ApiError> {
        let currency = Currency::from_code(&self.currency)
            .ok_or_else(|| ApiError::InvalidRecord(format!("unknown currency {}", self.currency)))?;
        let status = OrderStatus::from_str(&self.status)
            .ok_or_else(|| ApiError::InvalidRecord(format!("unknown status {}", self.status)))?;
        Ok(Order {
            id: self.order_id,
            offer_id: self.offer_id,
            store_id: self.store_id,
            user_id: self.user_id,
            quantity: self.quantity,
            total: Money::from_major(self.total_price, currency),
            status,
            pickup_code: self.pickup_code,
            created_at: self.created_at,
            updated_at: self.updated_at,
            cancelled_at: self.cancelled_at,
        })
    }
}

/// Response of `POST /payments/create-payment-intent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    /// Payment intent identifier at the provider.
    pub payment_intent_id: PaymentIntentId,
    /// Secret handed to the provider SDK to open the payment sheet.
    pub client_secret: String,
}

/// Error body the backend attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
