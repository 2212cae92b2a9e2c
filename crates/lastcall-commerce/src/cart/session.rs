//! Shared cart handle.
//!
//! The cart itself is plain mutable state. On the client it is mutated from
//! a single event loop; a multi-threaded host still gets the same
//! at-most-one-writer guarantee because every mutation goes through this
//! mutex. The lock is only held across synchronous mutation, never across
//! an await point.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::ids::OfferId;
use crate::money::Money;
use crate::offer::Offer;
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable handle to the session cart.
///
/// Passed explicitly to whatever needs the cart (screens, the checkout
/// engine) instead of living in ambient global state.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<Cart>>,
}

impl SharedCart {
    /// Create a handle around an empty cart.
    pub fn new() -> Self {
        Self::from_cart(Cart::new())
    }

    /// Create a handle around an existing cart.
    pub fn from_cart(cart: Cart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cart)),
        }
    }

    /// Run a closure with exclusive access to the cart.
    ///
    /// A poisoned lock is recovered: the cart holds no invariants that a
    /// panicking reader could have broken half-way.
    pub fn with<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Add one unit of an offer.
    pub fn add(&self, offer: &Offer) {
        self.with(|cart| cart.add(offer));
    }

    /// Remove the line for an offer id.
    pub fn remove(&self, offer_id: &OfferId) -> bool {
        self.with(|cart| cart.remove(offer_id))
    }

    /// Set the quantity for an offer id (zero or below removes).
    pub fn set_quantity(&self, offer_id: &OfferId, quantity: i64) -> bool {
        self.with(|cart| cart.set_quantity(offer_id, quantity))
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.with(|cart| cart.clear());
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.with(|cart| cart.item_count())
    }

    /// Cart total in minor units.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.with(|cart| cart.total())
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with(|cart| cart.is_empty())
    }

    /// Clone the current cart contents.
    pub fn snapshot(&self) -> Cart {
        self.with(|cart| cart.clone())
    }
}
