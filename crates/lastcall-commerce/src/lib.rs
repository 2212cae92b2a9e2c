//! Marketplace domain types and logic for the LastCall clients.
//!
//! This crate is the shared domain core of the consumer and merchant apps:
//!
//! - **Money**: integer minor-unit amounts with checked arithmetic
//! - **Offer**: backend-published surplus offers, local filtering
//! - **Cart**: the session cart with line items and derived pricing
//! - **Order**: order records, status transitions, pickup verification
//!
//! Everything here is pure in-memory logic; the HTTP boundary lives in
//! `lastcall-api` and the checkout flow in `lastcall-checkout`.
//!
//! # Example
//!
//! ```rust,ignore
//! use lastcall_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add(&offer);
//! cart.add(&offer); // same offer: one line, quantity 2
//!
//! let pricing = cart.pricing()?;
//! println!("Total: {} (you save {})", pricing.subtotal, pricing.savings);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod offer;
pub mod order;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Offers
    pub use crate::offer::{DietaryTag, Offer, OfferCategory, OfferFilter};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LinePricing, SharedCart};

    // Orders
    pub use crate::order::{Order, OrderStatus, PickupToken};
}
