//! Shopping cart module.
//!
//! Contains the cart store, line items, derived pricing, and the shared
//! session handle.

mod cart;
mod pricing;
mod session;

pub use cart::{Cart, LineItem};
pub use pricing::{CartPricing, LinePricing};
pub use session::SharedCart;
