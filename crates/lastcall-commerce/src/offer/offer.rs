//! Offer snapshot types.

use crate::ids::{OfferId, StoreId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Category of a surplus offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OfferCategory {
    /// Prepared meals.
    #[default]
    Meals,
    /// Bread and pastries.
    Bakery,
    /// Packaged groceries.
    Groceries,
    /// Fruit and vegetables.
    Produce,
    /// Anything else (flowers, mixed surprise bags).
    Other,
}

impl OfferCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferCategory::Meals => "meals",
            OfferCategory::Bakery => "bakery",
            OfferCategory::Groceries => "groceries",
            OfferCategory::Produce => "produce",
            OfferCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "meals" => Some(OfferCategory::Meals),
            "bakery" => Some(OfferCategory::Bakery),
            "groceries" => Some(OfferCategory::Groceries),
            "produce" => Some(OfferCategory::Produce),
            "other" => Some(OfferCategory::Other),
            _ => None,
        }
    }
}

/// Dietary tag on an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryTag {
    Vegetarian,
    Vegan,
    GlutenFree,
    LactoseFree,
}

impl DietaryTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "vegetarian",
            DietaryTag::Vegan => "vegan",
            DietaryTag::GlutenFree => "gluten_free",
            DietaryTag::LactoseFree => "lactose_free",
        }
    }
}

/// A surplus-food offer as published by the backend.
///
/// Offers are immutable snapshots: the cart stores a copy, so later backend
/// changes to price or availability never alter items already added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique offer identifier.
    pub id: OfferId,
    /// Store publishing the offer.
    pub store_id: StoreId,
    /// Offer title (e.g., "Surprise bag - bakery").
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Price before discount.
    pub original_price: Money,
    /// Price the customer pays.
    pub discounted_price: Money,
    /// How many units remain.
    pub quantity_available: i64,
    /// Offer category.
    pub category: OfferCategory,
    /// Dietary tags.
    #[serde(default)]
    pub dietary_tags: Vec<DietaryTag>,
    /// Unix timestamp when pickup opens.
    pub pickup_start: i64,
    /// Unix timestamp when pickup closes.
    pub pickup_end: i64,
}

impl Offer {
    /// Amount saved versus the original price.
    ///
    /// Returns `None` on currency mismatch between the two prices.
    pub fn savings(&self) -> Option<Money> {
        self.original_price.checked_sub(&self.discounted_price)
    }

    /// Discount as a percentage of the original price.
    pub fn discount_percent(&self) -> f64 {
        if self.original_price.minor == 0 {
            return 0.0;
        }
        let saved = self.original_price.minor - self.discounted_price.minor;
        (saved as f64 / self.original_price.minor as f64) * 100.0
    }

    /// Check whether any units remain.
    pub fn is_sold_out(&self) -> bool {
        self.quantity_available <= 0
    }

    /// Check whether the pickup window is open at `now`.
    pub fn is_pickup_open(&self, now: i64) -> bool {
        now >= self.pickup_start && now < self.pickup_end
    }

    /// Check whether the offer carries a dietary tag.
    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.dietary_tags.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample_offer() -> Offer {
        Offer {
            id: OfferId::new("offer-1"),
            store_id: StoreId::new("store-1"),
            title: "Surprise bag".to_string(),
            description: None,
            original_price: Money::new(1500, Currency::EUR),
            discounted_price: Money::new(500, Currency::EUR),
            quantity_available: 3,
            category: OfferCategory::Bakery,
            dietary_tags: vec![DietaryTag::Vegetarian],
            pickup_start: 1000,
            pickup_end: 2000,
        }
    }

    #[test]
    fn test_savings() {
        let offer = sample_offer();
        assert_eq!(offer.savings().unwrap().minor, 1000);
    }

    #[test]
    fn test_discount_percent() {
        let offer = sample_offer();
        assert!((offer.discount_percent() - 66.66).abs() < 0.1);
    }

    #[test]
    fn test_pickup_window() {
        let offer = sample_offer();
        assert!(!offer.is_pickup_open(999));
        assert!(offer.is_pickup_open(1000));
        assert!(offer.is_pickup_open(1999));
        assert!(!offer.is_pickup_open(2000));
    }

    #[test]
    fn test_sold_out() {
        let mut offer = sample_offer();
        assert!(!offer.is_sold_out());
        offer.quantity_available = 0;
        assert!(offer.is_sold_out());
    }

    #[test]
    fn test_offer_json_shape() {
        let offer = sample_offer();
        let json = serde_json::to_value(&offer).unwrap();
        assert!(json.get("storeId").is_some());
        assert!(json.get("discountedPrice").is_some());
    }
}
