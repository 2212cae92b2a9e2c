//! Order types.

use crate::error::CommerceError;
use crate::ids::{OfferId, OrderId, StoreId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, payment not yet settled or vendor not yet notified.
    #[default]
    Pending,
    /// Vendor accepted the order.
    Confirmed,
    /// Bag packed, waiting for the customer.
    Ready,
    /// Customer picked the order up.
    Collected,
    /// Order cancelled (by customer, vendor, or expiry).
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Ready => "ready",
            OrderStatus::Collected => "collected",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Ready => "Ready for pickup",
            OrderStatus::Collected => "Collected",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(OrderStatus::Pending),
            "confirmed" => Some(OrderStatus::Confirmed),
            "ready" => Some(OrderStatus::Ready),
            "collected" => Some(OrderStatus::Collected),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Collected | OrderStatus::Cancelled)
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }

    /// Check if a transition to `next` is allowed.
    ///
    /// The merchant UI uses this to enable/disable action buttons.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Confirmed)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
                | (OrderStatus::Confirmed, OrderStatus::Ready)
                | (OrderStatus::Confirmed, OrderStatus::Cancelled)
                | (OrderStatus::Ready, OrderStatus::Collected)
                | (OrderStatus::Ready, OrderStatus::Cancelled)
        )
    }
}

/// An order as seen by the clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Offer the order was placed against.
    pub offer_id: OfferId,
    /// Store fulfilling the order.
    pub store_id: StoreId,
    /// Ordering customer (None when not exposed, e.g. to the vendor list view).
    pub user_id: Option<UserId>,
    /// Quantity ordered.
    pub quantity: i64,
    /// Total charged.
    pub total: Money,
    /// Current status.
    pub status: OrderStatus,
    /// Code the customer presents at pickup.
    pub pickup_code: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Unix timestamp when cancelled (if applicable).
    pub cancelled_at: Option<i64>,
}

impl Order {
    /// Transition to a new status, validating the move.
    pub fn transition(&mut self, next: OrderStatus) -> Result<(), CommerceError> {
        if !self.status.can_transition_to(next) {
            return Err(CommerceError::InvalidOrderTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        self.status = next;
        self.updated_at = current_timestamp();
        if next == OrderStatus::Cancelled {
            self.cancelled_at = Some(self.updated_at);
        }
        Ok(())
    }

    /// Check if the order is in a state where pickup can be verified.
    pub fn is_collectable(&self) -> bool {
        matches!(self.status, OrderStatus::Confirmed | OrderStatus::Ready)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample_order(status: OrderStatus) -> Order {
        Order {
            id: OrderId::new("order-1"),
            offer_id: OfferId::new("offer-1"),
            store_id: StoreId::new("store-1"),
            user_id: None,
            quantity: 1,
            total: Money::new(500, Currency::EUR),
            status,
            pickup_code: "4821".to_string(),
            created_at: 0,
            updated_at: 0,
            cancelled_at: None,
        }
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut order = sample_order(OrderStatus::Pending);
        order.transition(OrderStatus::Confirmed).unwrap();
        order.transition(OrderStatus::Ready).unwrap();
        order.transition(OrderStatus::Collected).unwrap();
        assert!(order.status.is_terminal());
    }

    #[test]
    fn test_cannot_skip_states() {
        let mut order = sample_order(OrderStatus::Pending);
        assert!(order.transition(OrderStatus::Collected).is_err());
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut order = sample_order(OrderStatus::Collected);
        assert!(order.transition(OrderStatus::Cancelled).is_err());

        let mut order = sample_order(OrderStatus::Cancelled);
        assert!(order.transition(OrderStatus::Confirmed).is_err());
    }

    #[test]
    fn test_cancel_records_timestamp() {
        let mut order = sample_order(OrderStatus::Pending);
        order.transition(OrderStatus::Cancelled).unwrap();
        assert!(order.cancelled_at.is_some());
    }

    #[test]
    fn test_can_cancel() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(OrderStatus::Ready.can_cancel());
        assert!(!OrderStatus::Collected.can_cancel());
        assert!(!OrderStatus::Cancelled.can_cancel());
    }
}
