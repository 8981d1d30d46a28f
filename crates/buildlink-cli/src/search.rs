//! `search` and `map`: the filtered catalog as a table, JSON, or seller pins.

use anyhow::Context;
use buildlink_core::{
    load_catalog, load_wishlist, seller_locations, AppConfig, CatalogFilter, Coordinate, Product,
    RatingSummary, Wishlist,
};
use serde::Serialize;

use crate::args::{FilterArgs, LocationArgs, SourceArgs};

/// One row of search output.
#[derive(Debug, Serialize)]
struct Listing<'a> {
    id: &'a str,
    name: &'a str,
    category: &'static str,
    category_label: &'static str,
    price: f64,
    unit: &'a str,
    available: bool,
    stock_quantity: u32,
    rating: RatingSummary,
    seller: Option<&'a str>,
    distance_km: Option<f64>,
    saved: bool,
}

impl<'a> Listing<'a> {
    fn new(product: &'a Product, user: Option<Coordinate>, wishlist: &Wishlist) -> Self {
        let distance_km = user
            .zip(product.seller_coordinate())
            .map(|(u, s)| u.distance_km(&s));
        Self {
            id: &product.id,
            name: &product.name,
            category: product.category.as_str(),
            category_label: product.category.label(),
            price: product.price,
            unit: &product.unit,
            available: product.available,
            stock_quantity: product.stock_quantity,
            rating: product.rating_summary(),
            seller: product.seller_name(),
            distance_km,
            saved: wishlist.contains(&product.id),
        }
    }
}

pub(crate) fn load_products(
    config: &AppConfig,
    source: &SourceArgs,
) -> anyhow::Result<Vec<Product>> {
    let path = source.catalog_path(config);
    load_catalog(&path).with_context(|| format!("loading catalog from {}", path.display()))
}

/// The wishlist is optional; a missing path yields an empty list.
fn load_saved(config: &AppConfig, source: &SourceArgs) -> anyhow::Result<Wishlist> {
    match source.wishlist_path(config) {
        Some(path) => load_wishlist(&path)
            .with_context(|| format!("loading wishlist from {}", path.display())),
        None => Ok(Wishlist::new()),
    }
}

/// Run the catalog filter and print the surviving products.
///
/// # Errors
///
/// Returns an error if the catalog or wishlist cannot be loaded, or JSON
/// output cannot be serialized.
pub(crate) fn run_search(
    config: &AppConfig,
    filters: &FilterArgs,
    location: &LocationArgs,
    source: &SourceArgs,
    json: bool,
) -> anyhow::Result<()> {
    let products = load_products(config, source)?;
    let wishlist = load_saved(config, source)?;
    let user = location.coordinate();
    let filter_config = filters.to_configuration(config);

    let results = CatalogFilter::new(&filter_config, filters.query(), user).apply(&products);
    tracing::info!(
        total = products.len(),
        shown = results.len(),
        located = user.is_some(),
        "search complete"
    );

    let listings: Vec<Listing<'_>> = results
        .iter()
        .map(|p| Listing::new(p, user, &wishlist))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    if listings.is_empty() {
        println!("no products found; try adjusting your filters or search query");
        return Ok(());
    }

    println!(
        "{:<2}{:<32}{:<24}{:<22}{:<14}{:<18}SELLER",
        "", "NAME", "CATEGORY", "PRICE", "STATUS", "RATING"
    );
    for listing in &listings {
        let saved = if listing.saved { "*" } else { "" };
        let price = format!("\u{20b9}{:.2} per {}", listing.price, listing.unit);
        let status = if listing.available {
            "Available"
        } else {
            "Out of Stock"
        };
        let seller = match (listing.seller, listing.distance_km) {
            (Some(name), Some(km)) => format!("{name} ({km:.1} km)"),
            (Some(name), None) => name.to_string(),
            (None, _) => "\u{2014}".to_string(),
        };
        println!(
            "{:<2}{:<32}{:<24}{:<22}{:<14}{:<18}{}",
            saved,
            truncate(listing.name, 30),
            listing.category_label,
            price,
            status,
            listing.rating.to_string(),
            seller
        );
    }
    println!();
    println!("{} of {} products", listings.len(), products.len());

    Ok(())
}

/// Print the distinct seller locations behind the filtered results.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) fn run_map(
    config: &AppConfig,
    filters: &FilterArgs,
    location: &LocationArgs,
    source: &SourceArgs,
) -> anyhow::Result<()> {
    let products = load_products(config, source)?;
    let user = location.coordinate();
    let filter_config = filters.to_configuration(config);
    let results = CatalogFilter::new(&filter_config, filters.query(), user).apply(&products);
    let pins = seller_locations(&results);

    match user {
        Some(u) => println!("Your location: {:.6}, {:.6}", u.lat, u.lng),
        None => println!("Your location: unknown (pass --lat and --lng)"),
    }
    println!();

    if pins.is_empty() {
        println!("no seller locations to show");
        return Ok(());
    }

    println!("{:<32}{:<22}DISTANCE", "SELLER", "LOCATION");
    for pin in &pins {
        let distance = user.map_or_else(
            || "\u{2014}".to_string(),
            |u| format!("{:.1} km", u.distance_km(&pin.coordinate)),
        );
        println!(
            "{:<32}{:<22}{}",
            truncate(&pin.name, 30),
            pin.coordinate.to_string(),
            distance
        );
    }

    Ok(())
}

/// Shorten `s` to `max` characters, marking the cut with an ellipsis.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        s.to_string()
    }
}
