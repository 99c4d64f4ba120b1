//! Error paths: bad input surfaces as typed errors or `Err` responses.

use cycloroof::session::{dispatch, parse_command, SessionCommand, SessionResponse};
use cycloroof::{CatalogError, Inventory, RentalFleet, Session, SortKey};

#[test]
fn test_duplicate_ids_rejected() {
    let json = r#"[
        {"id":"1","name":"One","brand":"Acme","price":100000,"image":"","mileage":40,
         "fuelType":"Petrol","engine":"","power":"","torque":"","rpm":"","cylinders":1,"description":""},
        {"id":"1","name":"Two","brand":"Acme","price":120000,"image":"","mileage":45,
         "fuelType":"Petrol","engine":"","power":"","torque":"","rpm":"","cylinders":1,"description":""}
    ]"#;
    let err = Inventory::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));
}

#[test]
fn test_malformed_inventory_json() {
    assert!(Inventory::from_json("{not json").is_err());
    assert!(RentalFleet::from_json("[{\"id\":1}]").is_err());
}

#[test]
fn test_unknown_sort_key() {
    assert!("cheapest-first".parse::<SortKey>().is_err());
}

#[test]
fn test_unknown_ids_become_err_responses() {
    let mut session = Session::default();
    for line in [
        r#"{"cmd":"AddToCompare","vehicle_id":"99"}"#,
        r#"{"cmd":"Navigate","page":"details","vehicle_id":"99"}"#,
        r#"{"cmd":"Navigate","page":"garage"}"#,
        r#"{"cmd":"RentalRate","rental_id":"99"}"#,
        r#"{"cmd":"SetSort","sort":"random"}"#,
    ] {
        let response = dispatch(&mut session, parse_command(line).unwrap());
        assert!(
            matches!(response, SessionResponse::Err { .. }),
            "{line} should fail"
        );
    }
    assert_eq!(session.compare_count(), 0);
}

#[test]
fn test_unparseable_command_line() {
    assert!(parse_command("AddToCompare 3").is_err());
    assert!(parse_command(r#"{"cmd":"SetSearch"}"#).is_err());
    assert_eq!(
        parse_command(r#"{"cmd":"Shutdown"}"#).unwrap(),
        SessionCommand::Shutdown
    );
}
