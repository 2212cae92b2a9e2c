//! Derived cart pricing.

use crate::ids::OfferId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
///
/// Always derived from the cart contents, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of discounted line totals. What the customer pays.
    pub subtotal: Money,
    /// Sum of original-price line totals.
    pub original_subtotal: Money,
    /// What the customer saves versus original prices.
    pub savings: Money,
    /// Per-line breakdown.
    pub line_items: Vec<LinePricing>,
}

impl CartPricing {
    /// Savings as a percentage of the original subtotal.
    pub fn savings_percent(&self) -> f64 {
        if self.original_subtotal.minor == 0 {
            return 0.0;
        }
        (self.savings.minor as f64 / self.original_subtotal.minor as f64) * 100.0
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Offer this line is for.
    pub offer_id: OfferId,
    /// Discounted unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Unit price times quantity.
    pub line_total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_savings_percent() {
        let pricing = CartPricing {
            subtotal: Money::new(500, Currency::EUR),
            original_subtotal: Money::new(1500, Currency::EUR),
            savings: Money::new(1000, Currency::EUR),
            line_items: vec![],
        };
        assert!((pricing.savings_percent() - 66.66).abs() < 0.1);
    }

    #[test]
    fn test_savings_percent_empty() {
        let pricing = CartPricing {
            subtotal: Money::zero(Currency::EUR),
            original_subtotal: Money::zero(Currency::EUR),
            savings: Money::zero(Currency::EUR),
            line_items: vec![],
        };
        assert_eq!(pricing.savings_percent(), 0.0);
    }
}
