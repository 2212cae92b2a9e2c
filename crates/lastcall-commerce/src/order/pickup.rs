//! Pickup verification.
//!
//! The consumer app renders the pickup token as a QR code; the merchant app
//! scans it and matches it against the order being handed over.

use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::order::Order;
use serde::{Deserialize, Serialize};
use std::fmt;

/// URI scheme prefix of a pickup QR payload.
const SCHEME: &str = "lastcall";

/// The payload carried in a pickup QR code: `lastcall:<orderId>:<code>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickupToken {
    /// Order being collected.
    pub order_id: OrderId,
    /// Code the backend issued with the order.
    pub code: String,
}

impl PickupToken {
    /// Create a token for an order.
    pub fn new(order_id: OrderId, code: impl Into<String>) -> Self {
        Self {
            order_id,
            code: code.into(),
        }
    }

    /// Build the token for an order record.
    pub fn for_order(order: &Order) -> Self {
        Self::new(order.id.clone(), order.pickup_code.clone())
    }

    /// Parse a scanned QR payload.
    ///
    /// The code segment is taken verbatim, so codes containing `:` survive
    /// a round-trip.
    pub fn parse(payload: &str) -> Result<Self, CommerceError> {
        let mut parts = payload.splitn(3, ':');
        let scheme = parts.next().unwrap_or_default();
        if scheme != SCHEME {
            return Err(CommerceError::MalformedPickupToken(format!(
                "unknown scheme in {:?}",
                payload
            )));
        }
        let order_id = parts.next().unwrap_or_default();
        let code = parts.next().unwrap_or_default();
        if order_id.is_empty() || code.is_empty() {
            return Err(CommerceError::MalformedPickupToken(
                "missing order id or code".to_string(),
            ));
        }
        Ok(Self::new(OrderId::new(order_id), code))
    }

    /// Verify the token against the order being handed over.
    ///
    /// The order must match by id and code and be in a collectable state.
    pub fn verify(&self, order: &Order) -> Result<(), CommerceError> {
        if self.order_id != order.id {
            return Err(CommerceError::PickupVerificationFailed(
                "token is for a different order".to_string(),
            ));
        }
        if self.code != order.pickup_code {
            return Err(CommerceError::PickupVerificationFailed(
                "pickup code does not match".to_string(),
            ));
        }
        if !order.is_collectable() {
            return Err(CommerceError::PickupVerificationFailed(format!(
                "order is {}",
                order.status.as_str()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for PickupToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", SCHEME, self.order_id, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{OfferId, StoreId};
    use crate::money::{Currency, Money};
    use crate::order::OrderStatus;

    fn order(status: OrderStatus) -> Order {
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
    fn test_round_trip() {
        let token = PickupToken::new(OrderId::new("order-1"), "4821");
        let parsed = PickupToken::parse(&token.to_string()).unwrap();
        assert_eq!(parsed, token);
    }

    #[test]
    fn test_code_may_contain_colons() {
        let token = PickupToken::new(OrderId::new("order-1"), "a:b:c");
        let parsed = PickupToken::parse(&token.to_string()).unwrap();
        assert_eq!(parsed.code, "a:b:c");
    }

    #[test]
    fn test_parse_rejects_wrong_scheme() {
        assert!(PickupToken::parse("other:order-1:4821").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_parts() {
        assert!(PickupToken::parse("lastcall").is_err());
        assert!(PickupToken::parse("lastcall:order-1").is_err());
        assert!(PickupToken::parse("lastcall::4821").is_err());
    }

    #[test]
    fn test_verify_ready_order() {
        let order = order(OrderStatus::Ready);
        let token = PickupToken::for_order(&order);
        assert!(token.verify(&order).is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_order() {
        let order = order(OrderStatus::Ready);
        let token = PickupToken::new(OrderId::new("order-2"), "4821");
        assert!(token.verify(&order).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_code() {
        let order = order(OrderStatus::Ready);
        let token = PickupToken::new(OrderId::new("order-1"), "0000");
        assert!(token.verify(&order).is_err());
    }

    #[test]
    fn test_verify_rejects_collected_order() {
        let order = order(OrderStatus::Collected);
        let token = PickupToken::for_order(&order);
        assert!(token.verify(&order).is_err());
    }

    #[test]
    fn test_verify_rejects_cancelled_order() {
        let order = order(OrderStatus::Cancelled);
        let token = PickupToken::for_order(&order);
        assert!(token.verify(&order).is_err());
    }
}
