use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Catalog snapshot standing in for the backend's joined product query.
    pub catalog_path: PathBuf,
    pub wishlist_path: Option<PathBuf>,
    /// Initial search radius; always within `MAX_DISTANCE_RANGE_KM`.
    pub default_max_distance_km: f64,
    pub top_sellers_limit: usize,
}
