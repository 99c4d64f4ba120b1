//! Filter-sort engine behaviour over the sample inventory.

use std::collections::HashSet;

use cycloroof::catalog::{compute_view, locale_compare};
use cycloroof::{FuelType, Inventory, PriceRange, Query, SortKey};

use crate::common::harness::{make_vehicle, query_grid, reference_filter, view_ids};

fn sample() -> Inventory {
    Inventory::sample()
}

#[test]
fn test_price_ascending_over_full_inventory() {
    let inventory = sample();
    let query = Query::new().sort_by(SortKey::PriceAsc);

    let prices: Vec<u64> = compute_view(inventory.vehicles(), &query)
        .iter()
        .map(|v| v.price)
        .collect();
    assert_eq!(
        prices,
        vec![85_000, 110_000, 150_000, 185_000, 275_000, 350_000]
    );
}

#[test]
fn test_search_honda_keeps_inventory_order() {
    let inventory = sample();
    let query = Query::new().search("honda");

    assert_eq!(view_ids(inventory.vehicles(), &query), vec!["3", "4"]);
}

#[test]
fn test_search_matches_brand_as_well_as_name() {
    let inventory = sample();
    let query = Query::new().search("HERIT");

    assert_eq!(view_ids(inventory.vehicles(), &query), vec!["6"]);
}

#[test]
fn test_brand_filter_is_exact_and_case_sensitive() {
    let inventory = sample();

    let exact = Query::new().brand("Triumph");
    assert_eq!(view_ids(inventory.vehicles(), &exact), vec!["1"]);

    let lower = Query::new().brand("triumph");
    assert!(compute_view(inventory.vehicles(), &lower).is_empty());
}

#[test]
fn test_fuel_filter_with_mileage_sort() {
    let inventory = sample();
    let query = Query::new()
        .fuel_type(FuelType::Petrol)
        .sort_by(SortKey::MileageDesc);

    assert_eq!(view_ids(inventory.vehicles(), &query), vec!["6", "1", "5", "3"]);
}

#[test]
fn test_price_bounds_are_inclusive() {
    let inventory = sample();
    let query = Query::new().price_range(110_000, 185_000);

    assert_eq!(view_ids(inventory.vehicles(), &query), vec!["2", "3", "6"]);
}

#[test]
fn test_brand_ascending_uses_collation() {
    let inventory = sample();
    let query = Query::new().sort_by(SortKey::BrandAsc);

    let brands: Vec<&str> = compute_view(inventory.vehicles(), &query)
        .iter()
        .map(|v| v.brand.as_str())
        .collect();
    assert_eq!(
        brands,
        vec!["Adventure", "Electric", "Heritage", "Modern", "Triumph", "Vintage"]
    );
}

#[test]
fn test_view_is_filtered_subsequence_for_every_query() {
    let inventory = sample();
    for query in query_grid() {
        let view = compute_view(inventory.vehicles(), &query);
        let expected = reference_filter(inventory.vehicles(), &query);

        let got: HashSet<&str> = view.iter().map(|v| v.id.as_str()).collect();
        let want: HashSet<&str> = expected.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(got, want, "membership differs for {query:?}");
        assert_eq!(view.len(), expected.len(), "duplicates produced for {query:?}");

        for vehicle in &view {
            assert!(query.matches(vehicle), "{} leaked into {query:?}", vehicle.id);
        }
    }
}

#[test]
fn test_view_respects_sort_order_for_every_query() {
    let inventory = sample();
    for query in query_grid() {
        let view = compute_view(inventory.vehicles(), &query);
        for pair in view.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            match query.sort_key {
                SortKey::Default => {}
                SortKey::PriceAsc => assert!(a.price <= b.price),
                SortKey::PriceDesc => assert!(a.price >= b.price),
                SortKey::MileageDesc => assert!(a.mileage >= b.mileage),
                SortKey::BrandAsc => assert!(locale_compare(&a.brand, &b.brand).is_le()),
            }
        }

        if query.sort_key == SortKey::Default {
            let expected: Vec<&str> = reference_filter(inventory.vehicles(), &query)
                .iter()
                .map(|v| v.id.as_str())
                .collect();
            let got: Vec<&str> = view.iter().map(|v| v.id.as_str()).collect();
            assert_eq!(got, expected, "default order changed for {query:?}");
        }
    }
}

#[test]
fn test_view_is_idempotent_and_leaves_inventory_alone() {
    let inventory = sample();
    let before = inventory.vehicles().to_vec();
    for query in query_grid() {
        let first = view_ids(inventory.vehicles(), &query);
        let second = view_ids(inventory.vehicles(), &query);
        assert_eq!(first, second);
    }
    assert_eq!(inventory.vehicles(), before.as_slice());
}

#[test]
fn test_equal_keys_keep_inventory_order() {
    let vehicles = vec![
        make_vehicle("a", "Zephyr", 120_000, 40.0, FuelType::Petrol),
        make_vehicle("b", "Alpha", 90_000, 55.0, FuelType::Petrol),
        make_vehicle("c", "Zephyr", 120_000, 40.0, FuelType::Hybrid),
        make_vehicle("d", "alpha", 90_000, 55.0, FuelType::Electric),
        make_vehicle("e", "Alpha", 120_000, 40.0, FuelType::Petrol),
    ];
    let inventory = Inventory::new(vehicles).unwrap();
    let ids = |key| view_ids(inventory.vehicles(), &Query::new().sort_by(key));

    assert_eq!(ids(SortKey::PriceAsc), vec!["b", "d", "a", "c", "e"]);
    assert_eq!(ids(SortKey::PriceDesc), vec!["a", "c", "e", "b", "d"]);
    assert_eq!(ids(SortKey::MileageDesc), vec!["b", "d", "a", "c", "e"]);
    assert_eq!(ids(SortKey::BrandAsc), vec!["d", "b", "e", "a", "c"]);
}

#[test]
fn test_default_range_excludes_out_of_slider_prices() {
    let vehicles = vec![
        make_vehicle("cheap", "Acme", 45_000, 60.0, FuelType::Petrol),
        make_vehicle("mid", "Acme", 250_000, 30.0, FuelType::Petrol),
        make_vehicle("superbike", "Acme", 900_000, 15.0, FuelType::Petrol),
    ];
    let inventory = Inventory::new(vehicles).unwrap();

    assert_eq!(view_ids(inventory.vehicles(), &Query::new()), vec!["mid"]);

    let wide = Query::new().price_range(0, u64::MAX);
    assert_eq!(view_ids(inventory.vehicles(), &wide).len(), 3);
    assert_eq!(PriceRange::default(), PriceRange::new(50_000, 500_000));
}
