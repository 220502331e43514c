//! Read-only browsing queries over a restaurant database.

use std::cmp::Ordering;

use super::{Restaurant, RestaurantDatabase};

/// Query interface for the presentation layer. Never mutates the catalog.
pub struct RestaurantBrowsing<'a> {
    database: &'a RestaurantDatabase,
}

impl<'a> RestaurantBrowsing<'a> {
    pub fn new(database: &'a RestaurantDatabase) -> Self {
        RestaurantBrowsing { database }
    }

    /// All restaurants of a cuisine, matched case-insensitively.
    pub fn by_cuisine(&self, cuisine: &str) -> Vec<&'a Restaurant> {
        self.database
            .all()
            .iter()
            .filter(|r| r.cuisine.eq_ignore_ascii_case(cuisine))
            .collect()
    }

    /// All restaurants in a location, matched case-insensitively.
    pub fn by_location(&self, location: &str) -> Vec<&'a Restaurant> {
        self.database
            .all()
            .iter()
            .filter(|r| r.location.eq_ignore_ascii_case(location))
            .collect()
    }

    /// All restaurants rated at or above the given threshold.
    pub fn min_rating(&self, rating: f32) -> Vec<&'a Restaurant> {
        self.database
            .all()
            .iter()
            .filter(|r| r.rating >= rating)
            .collect()
    }

    /// The `n` best-rated restaurants, highest first.
    pub fn top_rated(&self, n: usize) -> Vec<&'a Restaurant> {
        let mut restaurants: Vec<&Restaurant> = self.database.all().iter().collect();
        restaurants.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        });
        restaurants.truncate(n);
        restaurants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_cuisine_is_case_insensitive() {
        let db = RestaurantDatabase::seed();
        let browsing = RestaurantBrowsing::new(&db);

        let results = browsing.by_cuisine("chinese");
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.cuisine.eq_ignore_ascii_case("chinese")));
        assert_eq!(results, browsing.by_cuisine("CHINESE"));
    }

    #[test]
    fn test_by_cuisine_unknown_is_empty() {
        let db = RestaurantDatabase::seed();
        let browsing = RestaurantBrowsing::new(&db);
        assert!(browsing.by_cuisine("martian").is_empty());
    }

    #[test]
    fn test_by_location() {
        let db = RestaurantDatabase::seed();
        let browsing = RestaurantBrowsing::new(&db);

        let results = browsing.by_location("Downtown");
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.location == "Downtown"));
    }

    #[test]
    fn test_min_rating_threshold_is_inclusive() {
        let db = RestaurantDatabase::seed();
        let browsing = RestaurantBrowsing::new(&db);

        let results = browsing.min_rating(4.5);
        assert!(results.iter().all(|r| r.rating >= 4.5));
        assert!(results.iter().any(|r| r.rating == 4.5));
    }

    #[test]
    fn test_top_rated_is_sorted_and_bounded() {
        let db = RestaurantDatabase::seed();
        let browsing = RestaurantBrowsing::new(&db);

        let top = browsing.top_rated(3);
        assert_eq!(top.len(), 3);
        assert!(top[0].rating >= top[1].rating);
        assert!(top[1].rating >= top[2].rating);

        // Asking for more than exists returns everything.
        let everything = browsing.top_rated(db.len() + 10);
        assert_eq!(everything.len(), db.len());
    }
}
