//! Boundary conditions of the catalog and session.

use cycloroof::catalog::compute_view;
use cycloroof::{FuelType, Inventory, Page, PriceRange, Query, Screen, Session, SortKey};

use crate::common::SessionHarness;

#[test]
fn test_inverted_price_range_matches_nothing() {
    let inventory = Inventory::sample();
    let query = Query::new().price_range(300_000, 100_000);
    assert!(compute_view(inventory.vehicles(), &query).is_empty());
}

#[test]
fn test_no_matches_is_empty_view_not_error() {
    let mut harness = SessionHarness::new();
    harness.session_mut().set_search_term("zzz-no-such-bike");

    let view = harness.session().view();
    assert!(view.is_empty());
    assert_eq!(view.total, 6);
    assert_eq!(view.summary(), "Showing 0 of 6 bikes");
}

#[test]
fn test_empty_inventory() {
    let inventory = Inventory::new(Vec::new()).unwrap();
    for key in SortKey::ALL {
        let query = Query::new().sort_by(key);
        assert!(compute_view(inventory.vehicles(), &query).is_empty());
    }
}

#[test]
fn test_single_price_point_range() {
    let inventory = Inventory::sample();
    let query = Query::new().price_range(85_000, 85_000);
    let ids: Vec<&str> = compute_view(inventory.vehicles(), &query)
        .iter()
        .map(|v| v.id.as_str())
        .collect();
    assert_eq!(ids, vec!["4"]);
}

#[test]
fn test_filters_combine_to_nothing() {
    let inventory = Inventory::sample();
    let query = Query::new()
        .brand("Triumph")
        .fuel_type(FuelType::Electric);
    assert!(compute_view(inventory.vehicles(), &query).is_empty());
}

#[test]
fn test_whitespace_search_is_literal() {
    let inventory = Inventory::sample();
    let query = Query::new().search(" 4");
    let ids: Vec<&str> = compute_view(inventory.vehicles(), &query)
        .iter()
        .map(|v| v.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_slider_bounds_snap_and_order() {
    assert_eq!(
        PriceRange::from_slider(204_000, 96_000),
        PriceRange::new(100_000, 200_000)
    );
    assert_eq!(
        PriceRange::from_slider(0, 10_000_000),
        PriceRange::new(50_000, 500_000)
    );
}

#[test]
fn test_details_page_without_vehicle() {
    let mut harness = SessionHarness::new();
    harness.session_mut().navigate(Page::Details, None).unwrap();
    assert!(matches!(
        harness.session().route(),
        Screen::DetailsUnavailable
    ));
}

#[test]
fn test_unknown_vehicle_navigation_keeps_previous_page() {
    let mut harness = SessionHarness::new();
    let session = harness.session_mut();
    session.navigate(Page::Catalog, None).unwrap();

    assert!(session.navigate(Page::Details, Some("404")).is_err());
    assert_eq!(session.current_page(), Page::Catalog);
}

#[test]
fn test_fresh_session_is_logged_out() {
    let session = Session::default();
    assert!(matches!(session.route(), Screen::Login));
    assert_eq!(session.compare_count(), 0);
}
