//! Per-seller views derived from a catalog snapshot: map pins and the
//! "top rated sellers" list.

use std::collections::HashMap;

use serde::Serialize;

use crate::geo::{distance_km, Coordinate};
use crate::products::{Product, RatingSummary, Seller};

/// Default length of the top-sellers list.
pub const DEFAULT_TOP_SELLERS_LIMIT: usize = 10;

/// One map pin per distinct seller with a known location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerLocation {
    pub seller_id: String,
    pub name: String,
    pub coordinate: Coordinate,
}

/// Aggregated reputation for one seller across all of its listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerStats {
    pub seller_id: String,
    pub full_name: String,
    pub coordinate: Option<Coordinate>,
    pub verified: bool,
    pub product_count: usize,
    pub review_count: usize,
    /// Mean over every review of every listing; 0 when unreviewed.
    pub avg_rating: f64,
    /// Set only when both the user and the seller location are known.
    pub distance_km: Option<f64>,
}

/// Identity of the seller behind `product`: the product's `seller_id`, then
/// the joined profile's id, then its display name.
fn seller_key(product: &Product) -> Option<(&str, &Seller)> {
    let seller = product.seller.as_ref()?;
    let key = product
        .seller_id
        .as_deref()
        .or(seller.id.as_deref())
        .unwrap_or(seller.full_name.as_str());
    Some((key, seller))
}

/// Distinct seller pins for `products`, in first-appearance order.
///
/// Sellers without a full coordinate are left off the map.
#[must_use]
pub fn seller_locations(products: &[&Product]) -> Vec<SellerLocation> {
    let mut seen = std::collections::HashSet::new();
    let mut pins = Vec::new();

    for product in products {
        let Some((key, seller)) = seller_key(product) else {
            continue;
        };
        let Some(coordinate) = seller.coordinate() else {
            continue;
        };
        if !seen.insert(key) {
            continue;
        }

        let name = if seller.full_name.trim().is_empty() {
            "Unknown".to_string()
        } else {
            seller.full_name.clone()
        };
        pins.push(SellerLocation {
            seller_id: key.to_string(),
            name,
            coordinate,
        });
    }

    pins
}

/// Aggregates every seller that appears in `products`, in first-appearance
/// order. `distance_km` is left unset.
#[must_use]
pub fn seller_stats(products: &[Product]) -> Vec<SellerStats> {
    struct Acc<'a> {
        seller: &'a Seller,
        product_count: usize,
        ratings: Vec<u8>,
    }

    let mut order: Vec<&str> = Vec::new();
    let mut by_key: HashMap<&str, Acc<'_>> = HashMap::new();

    for product in products {
        let Some((key, seller)) = seller_key(product) else {
            continue;
        };
        let acc = by_key.entry(key).or_insert_with(|| {
            order.push(key);
            Acc {
                seller,
                product_count: 0,
                ratings: Vec::new(),
            }
        });
        acc.product_count += 1;
        acc.ratings.extend(product.reviews.iter().map(|r| r.rating));
    }

    order
        .into_iter()
        .filter_map(|key| {
            let acc = by_key.remove(key)?;
            let summary = RatingSummary::from_ratings(acc.ratings);
            Some(SellerStats {
                seller_id: key.to_string(),
                full_name: acc.seller.full_name.clone(),
                coordinate: acc.seller.coordinate(),
                verified: acc.seller.verified,
                product_count: acc.product_count,
                review_count: summary.count,
                avg_rating: summary.average,
                distance_km: None,
            })
        })
        .collect()
}

/// Highest rated sellers first, at most `limit` of them.
///
/// Sellers with no reviews are left out. Ties on average break on review
/// count, then on catalog order. When `user_location` is known, each entry
/// with a known coordinate gets its distance from the user.
#[must_use]
pub fn top_sellers(
    products: &[Product],
    user_location: Option<Coordinate>,
    limit: usize,
) -> Vec<SellerStats> {
    let mut sellers: Vec<SellerStats> = seller_stats(products)
        .into_iter()
        .filter(|s| s.avg_rating > 0.0)
        .collect();

    // sort_by is stable, so equal entries keep catalog order
    sellers.sort_by(|a, b| {
        b.avg_rating
            .total_cmp(&a.avg_rating)
            .then_with(|| b.review_count.cmp(&a.review_count))
    });
    sellers.truncate(limit);

    if let Some(user) = user_location {
        for seller in &mut sellers {
            seller.distance_km = seller.coordinate.map(|c| distance_km(user, c));
        }
    }

    tracing::debug!(
        count = sellers.len(),
        limit,
        located = user_location.is_some(),
        "top sellers ranked"
    );

    sellers
}
