//! Cart and line item types.

use crate::cart::{CartPricing, LinePricing};
use crate::error::CommerceError;
use crate::ids::OfferId;
use crate::money::{Currency, Money};
use crate::offer::Offer;
use serde::{Deserialize, Serialize};

/// A line in the cart: one offer snapshot plus how many of it are held.
///
/// Invariant: `quantity >= 1`. A line whose quantity drops to zero is
/// removed from the cart, never kept as a zero-quantity record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The offer as it looked when first added.
    pub offer: Offer,
    /// Quantity held.
    pub quantity: i64,
}

impl LineItem {
    /// Total for this line: discounted price times quantity.
    pub fn line_total(&self) -> Option<Money> {
        self.offer.discounted_price.checked_mul(self.quantity)
    }

    /// Original-price total for this line.
    pub fn original_line_total(&self) -> Option<Money> {
        self.offer.original_price.checked_mul(self.quantity)
    }
}

/// The session cart: an ordered collection of line items.
///
/// At most one line per distinct offer id; insertion order is preserved
/// across quantity increments. The cart lives only in memory for the
/// duration of the session and is never sent to the backend as a whole —
/// checkout reads a snapshot of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, first-added-first.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self::with_currency(Currency::default())
    }

    /// Create an empty cart in a specific currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of an offer.
    ///
    /// If a line for the same offer id exists, its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended at the end.
    pub fn add(&mut self, offer: &Offer) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.offer.id == offer.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.items.push(LineItem {
            offer: offer.clone(),
            quantity: 1,
        });
    }

    /// Remove the line for an offer id. No-op if absent.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, offer_id: &OfferId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.offer.id != offer_id);
        self.items.len() < len_before
    }

    /// Set the quantity for an offer id.
    ///
    /// A quantity of zero or below behaves as `remove`. No-op if the offer
    /// is not in the cart. Returns whether the cart changed.
    pub fn set_quantity(&mut self, offer_id: &OfferId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(offer_id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.offer.id == offer_id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count: the sum of quantities, not the number of lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line for an offer id.
    pub fn get(&self, offer_id: &OfferId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.offer.id == offer_id)
    }

    /// First line of the cart, if any.
    pub fn first(&self) -> Option<&LineItem> {
        self.items.first()
    }

    /// Cart total: Σ discounted price × quantity, in minor units.
    ///
    /// Zero for an empty cart. Errors on currency mismatch between a line
    /// and the cart, or on arithmetic overflow.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency);
        for item in &self.items {
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            total = total
                .checked_add(&line)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: line.currency.code().to_string(),
                })?;
        }
        Ok(total)
    }

    /// Full pricing breakdown: per-line totals, subtotal, and savings
    /// versus original prices.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        let mut line_items = Vec::with_capacity(self.items.len());
        for item in &self.items {
            line_items.push(LinePricing {
                offer_id: item.offer.id.clone(),
                unit_price: item.offer.discounted_price,
                quantity: item.quantity,
                line_total: item.line_total().ok_or(CommerceError::Overflow)?,
            });
        }

        let subtotal = self.total()?;

        let mut original_subtotal = Money::zero(self.currency);
        for item in &self.items {
            let line = item.original_line_total().ok_or(CommerceError::Overflow)?;
            original_subtotal = original_subtotal
                .checked_add(&line)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: line.currency.code().to_string(),
                })?;
        }

        let savings = original_subtotal
            .checked_sub(&subtotal)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            original_subtotal,
            savings,
            line_items,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
