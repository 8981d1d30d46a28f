//! Catalog and wishlist snapshots read from disk.
//!
//! This is the only place entity shape is checked. The filter trusts whatever
//! it is handed, so malformed records are rejected here instead.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::products::Product;
use crate::wishlist::Wishlist;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// `.yaml` and `.yml` are YAML; everything else is read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => SnapshotFormat::Yaml,
            _ => SnapshotFormat::Json,
        }
    }
}

/// Either a bare array or an object with a `products` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WishlistDocument {
    Bare(Wishlist),
    Wrapped { product_ids: Wishlist },
}

/// Load, validate and order a catalog snapshot.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let content = read(path)?;
    let products = parse_catalog(&content, SnapshotFormat::from_path(path), path)?;
    tracing::debug!(path = %path.display(), count = products.len(), "catalog loaded");
    Ok(products)
}

/// Parse catalog text, validate it and sort newest-first.
///
/// `origin` is only used in error messages.
///
/// # Errors
///
/// Returns `CatalogError` on a parse or validation failure.
pub fn parse_catalog(
    content: &str,
    format: SnapshotFormat,
    origin: &Path,
) -> Result<Vec<Product>, CatalogError> {
    let mut products = match parse_document::<CatalogDocument>(content, format, origin)? {
        CatalogDocument::Bare(products) | CatalogDocument::Wrapped { products } => products,
    };

    validate_catalog(&products)?;
    sort_newest_first(&mut products);

    Ok(products)
}

/// Load a saved-products list.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn load_wishlist(path: &Path) -> Result<Wishlist, CatalogError> {
    let content = read(path)?;
    let wishlist = match parse_document::<WishlistDocument>(
        &content,
        SnapshotFormat::from_path(path),
        path,
    )? {
        WishlistDocument::Bare(w) | WishlistDocument::Wrapped { product_ids: w } => w,
    };
    tracing::debug!(path = %path.display(), count = wishlist.len(), "wishlist loaded");
    Ok(wishlist)
}

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn parse_document<T: DeserializeOwned>(
    content: &str,
    format: SnapshotFormat,
    origin: &Path,
) -> Result<T, CatalogError> {
    match format {
        SnapshotFormat::Json => serde_json::from_str(content).map_err(|e| CatalogError::Json {
            path: origin.display().to_string(),
            source: e,
        }),
        SnapshotFormat::Yaml => serde_yaml::from_str(content).map_err(|e| CatalogError::Yaml {
            path: origin.display().to_string(),
            source: e,
        }),
    }
}

/// Newest `created_at` first; undated products keep their relative order at
/// the end.
pub fn sort_newest_first(products: &mut [Product]) {
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn validate_catalog(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for product in products {
        if product.id.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "product '{}' has an empty id",
                product.name
            )));
        }

        if !seen_ids.insert(product.id.as_str()) {
            return Err(CatalogError::Validation(format!(
                "duplicate product id: '{}'",
                product.id
            )));
        }

        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::Validation(format!(
                "product '{}' has invalid price {}",
                product.id, product.price
            )));
        }

        if let Some(review) = product.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
            return Err(CatalogError::Validation(format!(
                "product '{}' has review rating {}; must be 1 through 5",
                product.id, review.rating
            )));
        }

        if let Some(coordinate) = product.seller_coordinate() {
            if !coordinate.is_valid() {
                return Err(CatalogError::Validation(format!(
                    "seller of product '{}' has out-of-range location ({}, {})",
                    product.id, coordinate.lat, coordinate.lng
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
