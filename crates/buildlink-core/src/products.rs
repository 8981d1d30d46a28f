use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::geo::Coordinate;

/// A catalog listing joined with its seller profile and review ratings.
///
/// Snapshots are owned by the backing store; the filter only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub seller_id: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Pricing unit, e.g. `"bag"` or `"ton"`.
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub available: bool,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Absent when the snapshot was fetched without the seller join.
    #[serde(default)]
    pub seller: Option<Seller>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

fn default_unit() -> String {
    "unit".to_string()
}

impl Product {
    /// Mean of all review ratings, unrounded. Zero when there are no reviews.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        self.rating_summary().average
    }

    #[must_use]
    pub fn rating_summary(&self) -> RatingSummary {
        RatingSummary::from_reviews(&self.reviews)
    }

    /// The seller's coordinate, or `None` if the seller or either part of
    /// its location is missing.
    #[must_use]
    pub fn seller_coordinate(&self) -> Option<Coordinate> {
        self.seller.as_ref().and_then(Seller::coordinate)
    }

    #[must_use]
    pub fn seller_name(&self) -> Option<&str> {
        self.seller.as_ref().map(|s| s.full_name.as_str())
    }
}

/// The subset of a seller profile that travels with a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(default)]
    pub id: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub verified: bool,
}

impl Seller {
    /// Both parts must be present; half a location counts as unknown.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating, 1 through 5.
    pub rating: u8,
}

/// Average star rating and review count, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub average: f64,
    pub count: usize,
}

impl RatingSummary {
    #[must_use]
    pub fn from_reviews(reviews: &[Review]) -> Self {
        Self::from_ratings(reviews.iter().map(|r| r.rating))
    }

    #[must_use]
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let (sum, count) = ratings
            .into_iter()
            .fold((0u64, 0usize), |(sum, count), r| (sum + u64::from(r), count + 1));

        // Review counts stay far below 2^52, so the casts are exact.
        #[allow(clippy::cast_precision_loss)]
        let average = if count == 0 {
            0.0
        } else {
            sum as f64 / count as f64
        };

        Self { average, count }
    }
}

impl std::fmt::Display for RatingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.count == 1 { "review" } else { "reviews" };
        write!(f, "{:.1} ({} {noun})", self.average, self.count)
    }
}
