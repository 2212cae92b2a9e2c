//! Local offer filtering.
//!
//! The consumer client fetches a page of offers and narrows it locally by
//! category and dietary tags; the backend is not re-queried per toggle.

use crate::money::Money;
use crate::offer::{DietaryTag, Offer, OfferCategory};
use serde::{Deserialize, Serialize};

/// Filter over a fetched slice of offers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OfferFilter {
    /// Restrict to a single category.
    pub category: Option<OfferCategory>,
    /// Required dietary tags (AND semantics: offer must carry all of them).
    pub dietary_tags: Vec<DietaryTag>,
    /// Maximum discounted price.
    pub max_price: Option<Money>,
    /// Drop sold-out offers.
    pub in_stock_only: bool,
}

impl OfferFilter {
    /// Create an empty filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: OfferCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Require a dietary tag.
    pub fn with_tag(mut self, tag: DietaryTag) -> Self {
        self.dietary_tags.push(tag);
        self
    }

    /// Cap the discounted price.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Drop sold-out offers.
    pub fn in_stock(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Check whether an offer passes the filter.
    pub fn matches(&self, offer: &Offer) -> bool {
        if let Some(category) = self.category {
            if offer.category != category {
                return false;
            }
        }
        if !self.dietary_tags.iter().all(|t| offer.has_tag(*t)) {
            return false;
        }
        if let Some(max) = &self.max_price {
            // A price in another currency never matches a capped filter.
            if offer.discounted_price.currency != max.currency
                || offer.discounted_price.minor > max.minor
            {
                return false;
            }
        }
        if self.in_stock_only && offer.is_sold_out() {
            return false;
        }
        true
    }

    /// Apply the filter to a slice, preserving order.
    pub fn apply<'a>(&self, offers: &'a [Offer]) -> Vec<&'a Offer> {
        offers.iter().filter(|o| self.matches(o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{OfferId, StoreId};
    use crate::money::Currency;

    fn offer(id: &str, category: OfferCategory, tags: Vec<DietaryTag>, price: i64) -> Offer {
        Offer {
            id: OfferId::new(id),
            store_id: StoreId::new("store-1"),
            title: id.to_string(),
            description: None,
            original_price: Money::new(price * 3, Currency::EUR),
            discounted_price: Money::new(price, Currency::EUR),
            quantity_available: 1,
            category,
            dietary_tags: tags,
            pickup_start: 0,
            pickup_end: i64::MAX,
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let offers = vec![
            offer("a", OfferCategory::Meals, vec![], 500),
            offer("b", OfferCategory::Bakery, vec![], 300),
        ];
        assert_eq!(OfferFilter::new().apply(&offers).len(), 2);
    }

    #[test]
    fn test_category_filter() {
        let offers = vec![
            offer("a", OfferCategory::Meals, vec![], 500),
            offer("b", OfferCategory::Bakery, vec![], 300),
        ];
        let filtered = OfferFilter::new()
            .with_category(OfferCategory::Bakery)
            .apply(&offers);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "b");
    }

    #[test]
    fn test_dietary_tags_are_and_semantics() {
        let offers = vec![
            offer("a", OfferCategory::Meals, vec![DietaryTag::Vegan], 500),
            offer(
                "b",
                OfferCategory::Meals,
                vec![DietaryTag::Vegan, DietaryTag::GlutenFree],
                300,
            ),
        ];
        let filtered = OfferFilter::new()
            .with_tag(DietaryTag::Vegan)
            .with_tag(DietaryTag::GlutenFree)
            .apply(&offers);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "b");
    }

    #[test]
    fn test_max_price() {
        let offers = vec![
            offer("a", OfferCategory::Meals, vec![], 500),
            offer("b", OfferCategory::Meals, vec![], 300),
        ];
        let filtered = OfferFilter::new()
            .with_max_price(Money::new(400, Currency::EUR))
            .apply(&offers);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.as_str(), "b");
    }

    #[test]
    fn test_in_stock_only() {
        let mut sold_out = offer("a", OfferCategory::Meals, vec![], 500);
        sold_out.quantity_available = 0;
        let offers = vec![sold_out, offer("b", OfferCategory::Meals, vec![], 300)];
        let filtered = OfferFilter::new().in_stock().apply(&offers);
        assert_eq!(filtered.len(), 1);
    }
}
