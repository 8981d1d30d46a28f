use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_str(), Some("./config/catalog.json"));
    assert!(cfg.wishlist_path.is_none());
    assert!((cfg.default_max_distance_km - 50.0).abs() < f64::EPSILON);
    assert_eq!(cfg.top_sellers_limit, 10);
}

#[test]
fn build_app_config_overrides() {
    let mut map = HashMap::new();
    map.insert("BUILDLINK_ENV", "production");
    map.insert("BUILDLINK_LOG_LEVEL", "debug");
    map.insert("BUILDLINK_CATALOG_PATH", "/srv/buildlink/catalog.yaml");
    map.insert("BUILDLINK_WISHLIST_PATH", "/srv/buildlink/wishlist.json");
    map.insert("BUILDLINK_DEFAULT_MAX_DISTANCE_KM", "25");
    map.insert("BUILDLINK_TOP_SELLERS_LIMIT", "3");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.catalog_path.to_str(),
        Some("/srv/buildlink/catalog.yaml")
    );
    assert_eq!(
        cfg.wishlist_path.as_deref().and_then(|p| p.to_str()),
        Some("/srv/buildlink/wishlist.json")
    );
    assert!((cfg.default_max_distance_km - 25.0).abs() < f64::EPSILON);
    assert_eq!(cfg.top_sellers_limit, 3);
}

#[test]
fn blank_wishlist_path_is_unset() {
    let mut map = HashMap::new();
    map.insert("BUILDLINK_WISHLIST_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.wishlist_path.is_none());
}

#[test]
fn max_distance_not_a_number() {
    let mut map = HashMap::new();
    map.insert("BUILDLINK_DEFAULT_MAX_DISTANCE_KM", "far");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BUILDLINK_DEFAULT_MAX_DISTANCE_KM"),
        "expected InvalidEnvVar(BUILDLINK_DEFAULT_MAX_DISTANCE_KM), got: {result:?}"
    );
}

#[test]
fn max_distance_out_of_range() {
    for raw in ["0", "0.5", "100.5", "-10"] {
        let mut map = HashMap::new();
        map.insert("BUILDLINK_DEFAULT_MAX_DISTANCE_KM", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BUILDLINK_DEFAULT_MAX_DISTANCE_KM"),
            "expected {raw} to be rejected, got: {result:?}"
        );
    }
}

#[test]
fn max_distance_range_edges_accepted() {
    for raw in ["1", "100"] {
        let mut map = HashMap::new();
        map.insert("BUILDLINK_DEFAULT_MAX_DISTANCE_KM", raw);
        assert!(build_app_config(lookup_from_map(&map)).is_ok());
    }
}

#[test]
fn top_sellers_limit_invalid() {
    for raw in ["0", "ten", "-1"] {
        let mut map = HashMap::new();
        map.insert("BUILDLINK_TOP_SELLERS_LIMIT", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BUILDLINK_TOP_SELLERS_LIMIT"),
            "expected {raw} to be rejected, got: {result:?}"
        );
    }
}
