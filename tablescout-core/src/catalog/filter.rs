//! Criteria filtering over the catalog.

use super::{PriceBand, Restaurant, RestaurantDatabase};

/// Search criteria. Unset fields match everything, so the default filter
/// returns the whole catalog.
#[derive(Debug, Clone, Default)]
pub struct RestaurantFilter {
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f32>,
    pub price: Option<PriceBand>,
    pub delivery: Option<bool>,
}

impl RestaurantFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_min_rating(mut self, rating: f32) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_price(mut self, price: PriceBand) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_delivery(mut self, delivery: bool) -> Self {
        self.delivery = Some(delivery);
        self
    }

    /// Whether a single restaurant satisfies every set criterion.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(cuisine) = &self.cuisine {
            if !restaurant.cuisine.eq_ignore_ascii_case(cuisine) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !restaurant.location.eq_ignore_ascii_case(location) {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if restaurant.rating < min_rating {
                return false;
            }
        }
        if let Some(price) = self.price {
            if restaurant.price != price {
                return false;
            }
        }
        if let Some(delivery) = self.delivery {
            if restaurant.delivery != delivery {
                return false;
            }
        }
        true
    }

    /// All catalog entries satisfying the criteria, in catalog order.
    pub fn apply<'a>(&self, database: &'a RestaurantDatabase) -> Vec<&'a Restaurant> {
        database.all().iter().filter(|r| self.matches(r)).collect()
    }
}
