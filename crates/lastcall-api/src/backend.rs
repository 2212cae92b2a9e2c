//! Backend trait seam.

use crate::error::ApiError;
use crate::requests::{CreateOrderRequest, OfferQuery};
use crate::responses::PaymentIntentResponse;
use async_trait::async_trait;
use lastcall_commerce::ids::OrderId;
use lastcall_commerce::offer::Offer;
use lastcall_commerce::order::Order;

/// The marketplace backend as the clients see it.
///
/// The checkout engine and the screens depend on this trait, not on the
/// HTTP client, so tests substitute an in-memory backend.
#[async_trait]
pub trait MarketBackend: Send + Sync {
    /// Fetch a page of offers.
    async fn list_offers(&self, query: &OfferQuery) -> Result<Vec<Offer>, ApiError>;

    /// Fetch a single order.
    async fn order(&self, order_id: &OrderId) -> Result<Order, ApiError>;

    /// Create an order for one offer.
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order, ApiError>;

    /// Cancel an order. Best-effort from the caller's perspective; the
    /// order may already have expired or been auto-cancelled server-side.
    async fn cancel_order(
        &self,
        order_id: &OrderId,
        reason: Option<&str>,
    ) -> Result<Order, ApiError>;

    /// Initialize a payment session for an order.
    async fn create_payment_intent(
        &self,
        order_id: &OrderId,
    ) -> Result<PaymentIntentResponse, ApiError>;
}
