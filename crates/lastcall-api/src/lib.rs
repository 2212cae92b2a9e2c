//! Typed REST client for the LastCall marketplace backend.
//!
//! This crate provides:
//! - `MarketBackend` - the backend trait the clients program against
//! - `HttpMarketBackend` - reqwest implementation with a flat timeout
//! - Request/response DTOs matching the backend's JSON

mod backend;
mod client;
mod error;
mod requests;
mod responses;

pub use backend::MarketBackend;
pub use client::{BackendConfig, HttpMarketBackend, REQUEST_TIMEOUT};
pub use error::ApiError;
pub use requests::{CancelOrderRequest, CreateOrderRequest, CreatePaymentIntentRequest, OfferQuery};
pub use responses::{OrderRecord, PaymentIntentResponse};
