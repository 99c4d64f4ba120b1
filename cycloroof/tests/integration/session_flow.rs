//! End-to-end browsing flows through the controller and the JSON protocol.

use cycloroof::session::{dispatch, parse_command, SessionResponse};
use cycloroof::{FuelType, Page, PriceRange, Screen, Session, SortKey};
use serde_json::Value;

use crate::common::SessionHarness;

fn send(session: &mut Session, line: &str) -> Value {
    match dispatch(session, parse_command(line).unwrap()) {
        SessionResponse::Ok { data } => data.unwrap_or(Value::Null),
        SessionResponse::Err { message } => panic!("{line} failed: {message}"),
    }
}

#[test]
fn test_browse_filter_compare_flow() {
    let mut harness = SessionHarness::new();
    let session = harness.session_mut();

    session.navigate(Page::Catalog, None).unwrap();
    session.set_fuel_type(Some(FuelType::Petrol));
    session.set_sort_key(SortKey::PriceDesc);
    assert_eq!(session.view().ids(), vec!["5", "1", "6", "3"]);

    session.set_price_range(PriceRange::from_slider(100_000, 200_000));
    assert_eq!(session.view().ids(), vec!["6", "3"]);
    assert_eq!(session.view().summary(), "Showing 2 of 6 bikes");

    assert!(session.add_to_compare("6").unwrap());
    session.navigate(Page::Compare, None).unwrap();
    match session.route() {
        Screen::Compare(selection) => assert_eq!(selection.ids(), vec!["6"]),
        other => panic!("expected compare screen, got {other:?}"),
    }
}

#[test]
fn test_details_route_after_card_click() {
    let mut harness = SessionHarness::new();
    harness
        .session_mut()
        .navigate(Page::Details, Some("2"))
        .unwrap();

    match harness.session().route() {
        Screen::Details(vehicle) => {
            assert_eq!(vehicle.name, "Ather 450S");
            assert!(vehicle.is_electric());
        }
        other => panic!("expected details, got {other:?}"),
    }
}

#[test]
fn test_logout_gates_every_page() {
    let mut harness = SessionHarness::new();
    harness.add("1");
    harness.session_mut().logout();

    for page in Page::ALL {
        harness.session_mut().navigate(page, None).unwrap();
        assert!(matches!(harness.session().route(), Screen::Login));
    }
    assert_eq!(harness.selected(), vec!["1"]);
}

#[test]
fn test_protocol_round_trip() {
    let mut session = Session::default();

    let login = send(&mut session, r#"{"cmd":"Login"}"#);
    assert_eq!(login["page"], "home");

    send(&mut session, r#"{"cmd":"Navigate","page":"catalog"}"#);
    let view = send(&mut session, r#"{"cmd":"SetSearch","term":"honda"}"#);
    assert_eq!(view["ids"], serde_json::json!(["3", "4"]));
    assert_eq!(view["summary"], "Showing 2 of 6 bikes");

    let added = send(&mut session, r#"{"cmd":"AddToCompare","vehicle_id":"4"}"#);
    assert_eq!(added["count"], 1);

    let route = send(&mut session, r#"{"cmd":"Route"}"#);
    assert_eq!(route["page"], "catalog");
    assert_eq!(route["compare_count"], 1);
    assert_eq!(route["nav"].as_array().unwrap().len(), 7);

    let reset = send(&mut session, r#"{"cmd":"ResetFilters"}"#);
    assert_eq!(reset["shown"], 6);

    let compare = send(&mut session, r#"{"cmd":"Compare"}"#);
    assert_eq!(compare["cheapest"], "4");
}

#[test]
fn test_rentals_page_lists_fleet() {
    let mut harness = SessionHarness::new();
    harness
        .session_mut()
        .navigate(Page::Rentals, None)
        .unwrap();

    match harness.session().route() {
        Screen::Rentals(fleet) => {
            assert_eq!(fleet.len(), 6);
            assert!(fleet.available().count() < fleet.len());
        }
        other => panic!("expected rentals, got {other:?}"),
    }
}
