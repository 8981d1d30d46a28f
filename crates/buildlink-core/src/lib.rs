pub mod app_config;
pub mod catalog;
pub mod category;
pub mod config;
pub mod error;
pub mod filter;
pub mod geo;
pub mod products;
pub mod sellers;
pub mod wishlist;

pub use app_config::{AppConfig, Environment};
pub use catalog::{load_catalog, load_wishlist, parse_catalog, SnapshotFormat};
pub use category::{Category, ALL_CATEGORIES_LABEL};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{CatalogError, ConfigError, CoreError};
pub use filter::{
    apply, CatalogFilter, FilterConfiguration, DEFAULT_MAX_DISTANCE_KM, MAX_DISTANCE_RANGE_KM,
};
pub use geo::{distance_km, Coordinate};
pub use products::{Product, RatingSummary, Review, Seller};
pub use sellers::{
    seller_locations, seller_stats, top_sellers, SellerLocation, SellerStats,
    DEFAULT_TOP_SELLERS_LIMIT,
};
pub use wishlist::Wishlist;
