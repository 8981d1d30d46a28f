use buildlink_core::{top_sellers, AppConfig, RatingSummary, SellerStats};

use crate::args::{LocationArgs, SourceArgs};
use crate::search::{load_products, truncate};

/// Print the highest rated sellers, nearest-distance annotated when the
/// user's location is known.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON output fails.
pub(crate) fn run_sellers(
    config: &AppConfig,
    location: &LocationArgs,
    source: &SourceArgs,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let products = load_products(config, source)?;
    let limit = limit.unwrap_or(config.top_sellers_limit);
    let sellers = top_sellers(&products, location.coordinate(), limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&sellers)?);
        return Ok(());
    }

    if sellers.is_empty() {
        println!("no highly rated sellers found yet");
        return Ok(());
    }

    println!(
        "{:<6}{:<32}{:<20}{:<12}PRODUCTS",
        "RANK", "SELLER", "RATING", "DISTANCE"
    );
    for (idx, seller) in sellers.iter().enumerate() {
        println!(
            "{:<6}{:<32}{:<20}{:<12}{}",
            idx + 1,
            display_name(seller),
            rating(seller),
            distance(seller),
            seller.product_count
        );
    }

    Ok(())
}

fn display_name(seller: &SellerStats) -> String {
    let name = truncate(&seller.full_name, 28);
    if seller.verified {
        format!("{name} \u{2713}")
    } else {
        name
    }
}

fn rating(seller: &SellerStats) -> String {
    RatingSummary {
        average: seller.avg_rating,
        count: seller.review_count,
    }
    .to_string()
}

fn distance(seller: &SellerStats) -> String {
    seller
        .distance_km
        .map_or_else(|| "\u{2014}".to_string(), |km| format!("{km:.1} km"))
}
