//! Argument groups shared by several subcommands.

use std::path::PathBuf;

use buildlink_core::{
    AppConfig, Category, Coordinate, FilterConfiguration, MAX_DISTANCE_RANGE_KM,
};
use clap::Args;

/// Filter state, one flag per field of [`FilterConfiguration`].
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Free-text search across name, category, description and seller
    pub query: Option<String>,

    /// Raw category value (e.g. `iron_rods`); omit for all categories
    #[arg(long, value_parser = parse_category)]
    pub category: Option<String>,

    /// Lowest price to show; 0 means no lower bound
    #[arg(long, value_parser = parse_non_negative)]
    pub price_min: Option<f64>,

    /// Highest price to show; 0 means no upper bound
    #[arg(long, value_parser = parse_non_negative)]
    pub price_max: Option<f64>,

    /// Search radius in kilometers (1-100); defaults to the configured radius
    #[arg(long, value_parser = parse_max_distance)]
    pub max_distance: Option<f64>,

    /// Minimum average rating (1-5); 0 means no rating constraint
    #[arg(long, value_parser = parse_min_rating)]
    pub min_rating: Option<f64>,

    /// Only show products that are in stock
    #[arg(long)]
    pub available: bool,
}

impl FilterArgs {
    /// Builds the filter configuration, filling unset fields from defaults.
    #[must_use]
    pub fn to_configuration(&self, config: &AppConfig) -> FilterConfiguration {
        FilterConfiguration {
            price_min: self.price_min.unwrap_or(0.0),
            price_max: self.price_max.unwrap_or(0.0),
            max_distance: self.max_distance.unwrap_or(config.default_max_distance_km),
            min_rating: self.min_rating.unwrap_or(0.0),
            category: self.category.clone().unwrap_or_default(),
            availability: self.available,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }
}

/// The user's position, if known. Both flags or neither.
#[derive(Debug, Clone, Default, Args)]
pub struct LocationArgs {
    /// Your latitude in decimal degrees
    #[arg(long, requires = "lng", allow_negative_numbers = true, value_parser = parse_latitude)]
    pub lat: Option<f64>,

    /// Your longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true, value_parser = parse_longitude)]
    pub lng: Option<f64>,
}

impl LocationArgs {
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.lat?, self.lng?))
    }
}

/// Where the catalog and wishlist snapshots come from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Catalog snapshot (JSON or YAML); defaults to `BUILDLINK_CATALOG_PATH`
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Saved product ids (JSON or YAML); defaults to `BUILDLINK_WISHLIST_PATH`
    #[arg(long)]
    pub wishlist: Option<PathBuf>,
}

impl SourceArgs {
    #[must_use]
    pub fn catalog_path(&self, config: &AppConfig) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| config.catalog_path.clone())
    }

    #[must_use]
    pub fn wishlist_path(&self, config: &AppConfig) -> Option<PathBuf> {
        self.wishlist
            .clone()
            .or_else(|| config.wishlist_path.clone())
    }
}

fn parse_category(raw: &str) -> Result<String, String> {
    if raw.is_empty() {
        return Ok(String::new());
    }
    raw.parse::<Category>().map(|c| c.as_str().to_string()).map_err(|_| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category '{raw}'; expected one of {}", known.join(", "))
    })
}

fn parse_number(raw: &str) -> Result<f64, String> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| format!("'{raw}' is not a number: {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite number"))
    }
}

fn parse_in_range(raw: &str, range: std::ops::RangeInclusive<f64>) -> Result<f64, String> {
    let value = parse_number(raw)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "{value} is outside {}..={}",
            range.start(),
            range.end()
        ))
    }
}

fn parse_non_negative(raw: &str) -> Result<f64, String> {
    parse_in_range(raw, 0.0..=f64::MAX)
}

fn parse_max_distance(raw: &str) -> Result<f64, String> {
    parse_in_range(raw, MAX_DISTANCE_RANGE_KM)
}

/// 0 is accepted as "no constraint"; anything else must be a star value.
fn parse_min_rating(raw: &str) -> Result<f64, String> {
    let value = parse_in_range(raw, 0.0..=5.0)?;
    if value > 0.0 && value < 1.0 {
        return Err(format!("{value} is below the lowest rating of 1"));
    }
    Ok(value)
}

fn parse_latitude(raw: &str) -> Result<f64, String> {
    parse_in_range(raw, -90.0..=90.0)
}

fn parse_longitude(raw: &str) -> Result<f64, String> {
    parse_in_range(raw, -180.0..=180.0)
}
