//! End-to-end checks against the sample catalog in `config/catalog.json`.

use std::path::Path;

use buildlink_core::{
    apply, load_catalog, seller_locations, top_sellers, Coordinate, FilterConfiguration, Product,
    Wishlist,
};

const HYDERABAD: Coordinate = Coordinate {
    lat: 17.3850,
    lng: 78.4867,
};

fn sample_catalog() -> Vec<Product> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("catalog.json");
    load_catalog(&path).expect("sample catalog should load")
}

fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn unconstrained_filter_returns_catalog_in_loaded_order() {
    let catalog = sample_catalog();
    let result = apply(&catalog, &FilterConfiguration::default(), "", None);
    assert_eq!(result.len(), catalog.len());
    assert!(result.iter().zip(&catalog).all(|(a, b)| a.id == b.id));
}

#[test]
fn nearby_in_stock_cement_search() {
    let catalog = sample_catalog();
    let config = FilterConfiguration {
        max_distance: 20.0,
        availability: true,
        ..FilterConfiguration::default()
    };
    let result = apply(&catalog, &config, "Shree", Some(HYDERABAD));
    // the POP listing shares the seller but is out of stock
    assert_eq!(names(&result), vec!["UltraTech OPC 53 Grade Cement"]);
}

#[test]
fn distance_filter_drops_far_and_unlocated_sellers() {
    let catalog = sample_catalog();
    let config = FilterConfiguration {
        max_distance: 50.0,
        ..FilterConfiguration::default()
    };
    let result = apply(&catalog, &config, "", Some(HYDERABAD));
    assert_eq!(
        names(&result),
        vec![
            "River Sand (Fine)",
            "UltraTech OPC 53 Grade Cement",
            "Sakarni Plaster of Paris",
        ]
    );
}

#[test]
fn category_and_price_window() {
    let catalog = sample_catalog();
    let config = FilterConfiguration {
        category: "iron_rods".to_string(),
        price_min: 50.0,
        price_max: 70.0,
        ..FilterConfiguration::default()
    };
    assert_eq!(
        names(&apply(&catalog, &config, "", None)),
        vec!["12mm TMT Bar"]
    );
}

#[test]
fn min_rating_excludes_unreviewed_bed() {
    let catalog = sample_catalog();
    let config = FilterConfiguration {
        min_rating: 4.0,
        ..FilterConfiguration::default()
    };
    let result = names(&apply(&catalog, &config, "", None));
    assert!(!result.contains(&"Teak Wood Queen Bed".to_string()));
    assert!(!result.contains(&"River Sand (Fine)".to_string()));
    assert_eq!(result.len(), 3);
}

#[test]
fn map_pins_follow_filtered_results() {
    let catalog = sample_catalog();
    let config = FilterConfiguration {
        max_distance: 50.0,
        ..FilterConfiguration::default()
    };
    let result = apply(&catalog, &config, "", Some(HYDERABAD));
    let pins = seller_locations(&result);
    let ids: Vec<&str> = pins.iter().map(|p| p.seller_id.as_str()).collect();
    assert_eq!(ids, vec!["seller-godavari-sand", "seller-shree-cement"]);
}

#[test]
fn top_sellers_with_distance() {
    let catalog = sample_catalog();
    let top = top_sellers(&catalog, Some(HYDERABAD), 10);
    let ids: Vec<&str> = top.iter().map(|s| s.seller_id.as_str()).collect();
    // Vizag 5.0 (2), Shree 4.5 (4), Godavari 3.5 (2); Teak unreviewed
    assert_eq!(
        ids,
        vec!["seller-vizag-steel", "seller-shree-cement", "seller-godavari-sand"]
    );
    assert!(top[0].distance_km.is_some_and(|d| d > 400.0));
    assert!(top[2].distance_km.is_some_and(|d| d < 1e-6));
}

#[test]
fn wishlist_does_not_affect_filtering() {
    let catalog = sample_catalog();
    let wishlist: Wishlist = ["8f1c2a3e-0004"].into_iter().collect();
    let result = apply(&catalog, &FilterConfiguration::default(), "tmt", None);
    assert_eq!(result.len(), 1);
    assert!(wishlist.contains(&result[0].id));
}
