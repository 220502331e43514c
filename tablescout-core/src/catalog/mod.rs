//! Restaurant catalog: records, a flat-file database, browsing queries,
//! and criteria filtering.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

mod browsing;
mod error;
mod filter;

pub use browsing::RestaurantBrowsing;
pub use error::CatalogError;
pub use filter::RestaurantFilter;

/// Rough price tier of a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    Budget,
    Moderate,
    Upscale,
}

impl PriceBand {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "budget" => Some(PriceBand::Budget),
            "moderate" => Some(PriceBand::Moderate),
            "upscale" => Some(PriceBand::Upscale),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Budget => "budget",
            PriceBand::Moderate => "moderate",
            PriceBand::Upscale => "upscale",
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub rating: f32,
    pub price: PriceBand,
    pub delivery: bool,
}

/// In-memory restaurant catalog, loaded once at startup.
pub struct RestaurantDatabase {
    restaurants: Vec<Restaurant>,
}

impl RestaurantDatabase {
    /// Load the catalog from a JSON array file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path.as_ref())?;
        let restaurants: Vec<Restaurant> = serde_json::from_str(&data)?;
        debug!(count = restaurants.len(), "restaurant catalog loaded");
        Ok(RestaurantDatabase { restaurants })
    }

    /// Built-in catalog used when no data file is configured.
    pub fn seed() -> Self {
        fn entry(
            name: &str,
            cuisine: &str,
            location: &str,
            rating: f32,
            price: PriceBand,
            delivery: bool,
        ) -> Restaurant {
            Restaurant {
                id: Uuid::new_v4(),
                name: name.to_string(),
                cuisine: cuisine.to_string(),
                location: location.to_string(),
                rating,
                price,
                delivery,
            }
        }

        RestaurantDatabase {
            restaurants: vec![
                entry("Golden Wok", "Chinese", "Downtown", 4.5, PriceBand::Moderate, true),
                entry("Pasta Nostra", "Italian", "Riverside", 4.2, PriceBand::Upscale, false),
                entry("Taco Verde", "Mexican", "Downtown", 4.0, PriceBand::Budget, true),
                entry("Sakura House", "Japanese", "Midtown", 4.7, PriceBand::Upscale, false),
                entry("Curry Leaf", "Indian", "Riverside", 4.3, PriceBand::Moderate, true),
                entry("Le Petit Jardin", "French", "Midtown", 4.8, PriceBand::Upscale, false),
                entry("Burger Barn", "American", "Downtown", 3.8, PriceBand::Budget, true),
                entry("Pho Station", "Vietnamese", "Midtown", 4.4, PriceBand::Budget, true),
            ],
        }
    }

    pub fn all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
