//! Request bodies and query parameters for the backend API.

use lastcall_commerce::ids::{OfferId, OrderId, StoreId};
use lastcall_commerce::offer::OfferCategory;
use serde::{Deserialize, Serialize};

/// Body of `POST /orders`.
///
/// The backend accepts exactly one offer per order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Offer to order.
    pub offer_id: OfferId,
    /// How many units.
    pub quantity: i64,
}

/// Body of `POST /orders/{orderId}/cancel`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderRequest {
    /// Optional free-form reason, forwarded to the vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body of `POST /payments/create-payment-intent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Order the payment is for.
    pub order_id: OrderId,
}

/// Query parameters of `GET /offers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferQuery {
    /// Restrict to a category.
    pub category: Option<OfferCategory>,
    /// Restrict to a store.
    pub store_id: Option<StoreId>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
}

impl OfferQuery {
    /// Render as query-string pairs.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(store_id) = &self.store_id {
            pairs.push(("storeId", store_id.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize", page_size.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_json_shape() {
        let req = CreateOrderRequest {
            offer_id: OfferId::new("offer-1"),
            quantity: 2,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["offerId"], "offer-1");
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_cancel_reason_omitted_when_absent() {
        let json = serde_json::to_string(&CancelOrderRequest::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_offer_query_pairs() {
        let query = OfferQuery {
            category: Some(OfferCategory::Bakery),
            store_id: None,
            page: Some(2),
            page_size: Some(20),
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("category", "bakery".to_string())));
        assert!(pairs.contains(&("page", "2".to_string())));
        assert_eq!(pairs.len(), 3);
    }
}
