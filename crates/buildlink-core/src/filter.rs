//! Client-side catalog filtering.
//!
//! [`apply`] is the whole contract: a stable, side-effect-free projection of
//! the catalog through up to seven AND-combined predicates. Callers re-run it
//! whenever the catalog, the configuration, the query or the user location
//! changes; nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::geo::{distance_km, Coordinate};
use crate::products::Product;

/// Default search radius offered to users, in kilometers.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Bounds of the distance slider.
pub const MAX_DISTANCE_RANGE_KM: std::ops::RangeInclusive<f64> = 1.0..=100.0;

/// User-selected filter state.
///
/// `price_min`, `price_max` and `min_rating` use `0` to mean "no constraint",
/// so a literal zero bound cannot be expressed. `max_distance == 0` likewise
/// switches the distance predicate off. The `*_bound` accessors turn these
/// sentinels into explicit options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfiguration {
    pub price_min: f64,
    pub price_max: f64,
    /// Kilometers from the user; meaningful range is 1 through 100.
    pub max_distance: f64,
    /// Minimum average star rating, 1 through 5, or 0 for none.
    pub min_rating: f64,
    /// Raw category value; empty means all categories.
    pub category: String,
    /// When `true`, only in-stock products pass.
    pub availability: bool,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self {
            price_min: 0.0,
            price_max: 0.0,
            max_distance: DEFAULT_MAX_DISTANCE_KM,
            min_rating: 0.0,
            category: String::new(),
            availability: false,
        }
    }
}

impl FilterConfiguration {
    #[must_use]
    pub fn price_min_bound(&self) -> Option<f64> {
        active(self.price_min)
    }

    #[must_use]
    pub fn price_max_bound(&self) -> Option<f64> {
        active(self.price_max)
    }

    #[must_use]
    pub fn min_rating_bound(&self) -> Option<f64> {
        active(self.min_rating)
    }

    #[must_use]
    pub fn max_distance_bound(&self) -> Option<f64> {
        active(self.max_distance)
    }

    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        Some(self.category.as_str()).filter(|c| !c.is_empty())
    }
}

fn active(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

/// A prepared filter: the configuration plus the normalized query and the
/// optional user location.
#[derive(Debug, Clone)]
pub struct CatalogFilter<'a> {
    config: &'a FilterConfiguration,
    /// Trimmed and lowercased; `None` when the query is blank.
    needle: Option<String>,
    user_location: Option<Coordinate>,
}

impl<'a> CatalogFilter<'a> {
    #[must_use]
    pub fn new(
        config: &'a FilterConfiguration,
        query: &str,
        user_location: Option<Coordinate>,
    ) -> Self {
        let trimmed = query.trim();
        let needle = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        Self {
            config,
            needle,
            user_location,
        }
    }

    /// Returns `true` if `product` passes every active predicate.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && self.matches_availability(product)
            && self.matches_distance(product)
            && self.matches_rating(product)
    }

    /// Keeps the products that pass, in their original order.
    #[must_use]
    pub fn apply<'p>(&self, products: &'p [Product]) -> Vec<&'p Product> {
        let kept: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();

        tracing::debug!(
            input = products.len(),
            output = kept.len(),
            text = self.needle.is_some(),
            category = self.config.category_filter().is_some(),
            price_min = self.config.price_min_bound().is_some(),
            price_max = self.config.price_max_bound().is_some(),
            availability = self.config.availability,
            distance = self.distance_limit().is_some(),
            min_rating = self.config.min_rating_bound().is_some(),
            "catalog filter applied"
        );

        kept
    }

    fn matches_text(&self, product: &Product) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

        contains(product.name.as_str())
            || contains(product.category.as_str())
            || product.description.as_deref().is_some_and(contains)
            || product.seller_name().is_some_and(contains)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.config
            .category_filter()
            .is_none_or(|category| product.category.as_str() == category)
    }

    fn matches_price(&self, product: &Product) -> bool {
        self.config
            .price_min_bound()
            .is_none_or(|min| product.price >= min)
            && self
                .config
                .price_max_bound()
                .is_none_or(|max| product.price <= max)
    }

    fn matches_availability(&self, product: &Product) -> bool {
        !self.config.availability || product.available
    }

    fn matches_distance(&self, product: &Product) -> bool {
        let Some((user, limit)) = self.distance_limit() else {
            return true;
        };
        // Unknown seller location never passes an active distance filter.
        product
            .seller_coordinate()
            .is_some_and(|seller| distance_km(user, seller) <= limit)
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.config
            .min_rating_bound()
            .is_none_or(|min| product.average_rating() >= min)
    }

    fn distance_limit(&self) -> Option<(Coordinate, f64)> {
        Some((self.user_location?, self.config.max_distance_bound()?))
    }
}

/// Filters `products` by `config`, the free-text `query` and the optional
/// `user_location`.
///
/// Stable and idempotent: survivors keep their input order, and filtering the
/// output again with the same arguments returns it unchanged.
#[must_use]
pub fn apply<'p>(
    products: &'p [Product],
    config: &FilterConfiguration,
    query: &str,
    user_location: Option<Coordinate>,
) -> Vec<&'p Product> {
    CatalogFilter::new(config, query, user_location).apply(products)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
