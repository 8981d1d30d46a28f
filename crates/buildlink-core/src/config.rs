use crate::app_config::{AppConfig, Environment};
use crate::filter::{DEFAULT_MAX_DISTANCE_KM, MAX_DISTANCE_RANGE_KM};
use crate::sellers::DEFAULT_TOP_SELLERS_LIMIT;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("BUILDLINK_ENV", "development"));
    let log_level = or_default("BUILDLINK_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "BUILDLINK_CATALOG_PATH",
        "./config/catalog.json",
    ));
    let wishlist_path = lookup("BUILDLINK_WISHLIST_PATH")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from);

    let var = "BUILDLINK_DEFAULT_MAX_DISTANCE_KM";
    let default_max_distance_km = or_default(var, &DEFAULT_MAX_DISTANCE_KM.to_string())
        .parse::<f64>()
        .map_err(|e| invalid(var, e.to_string()))?;
    if !MAX_DISTANCE_RANGE_KM.contains(&default_max_distance_km) {
        return Err(invalid(
            var,
            format!(
                "{default_max_distance_km} is outside {}..={} km",
                MAX_DISTANCE_RANGE_KM.start(),
                MAX_DISTANCE_RANGE_KM.end()
            ),
        ));
    }

    let var = "BUILDLINK_TOP_SELLERS_LIMIT";
    let top_sellers_limit = or_default(var, &DEFAULT_TOP_SELLERS_LIMIT.to_string())
        .parse::<usize>()
        .map_err(|e| invalid(var, e.to_string()))?;
    if top_sellers_limit == 0 {
        return Err(invalid(var, "must be at least 1".to_string()));
    }

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        wishlist_path,
        default_max_distance_km,
        top_sellers_limit,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
