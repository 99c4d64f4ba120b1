//! Comparison selection through the session controller.

use cycloroof::{ComparisonSelection, Inventory};

use crate::common::SessionHarness;

#[test]
fn test_selection_caps_at_three() {
    let mut harness = SessionHarness::new();
    assert!(harness.add("1"));
    assert!(harness.add("2"));
    assert!(harness.add("3"));

    assert!(!harness.add("4"));
    assert_eq!(harness.selected(), vec!["1", "2", "3"]);
}

#[test]
fn test_duplicate_add_is_noop() {
    let mut harness = SessionHarness::new();
    assert!(harness.add("5"));
    assert!(!harness.add("5"));
    assert_eq!(harness.selected(), vec!["5"]);
}

#[test]
fn test_remove_then_add_fills_freed_slot() {
    let mut harness = SessionHarness::new();
    for id in ["1", "2", "3"] {
        harness.add(id);
    }
    assert!(harness.remove("2"));
    assert!(harness.add("6"));

    assert_eq!(harness.selected(), vec!["1", "3", "6"]);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut harness = SessionHarness::new();
    harness.add("1");
    assert!(!harness.remove("4"));
    assert_eq!(harness.selected(), vec!["1"]);
}

#[test]
fn test_add_then_remove_restores_selection() {
    let inventory = Inventory::sample();
    let mut selection = ComparisonSelection::new();
    selection.add(inventory.get("2").unwrap().clone());

    for vehicle in inventory.vehicles() {
        if selection.contains(&vehicle.id) {
            continue;
        }
        let before = selection.clone();
        assert!(selection.add(vehicle.clone()));
        assert!(selection.remove(&vehicle.id));
        assert_eq!(selection, before);
    }
}

#[test]
fn test_selection_never_exceeds_cap_under_any_order() {
    let inventory = Inventory::sample();
    let ids: Vec<&str> = inventory.vehicles().iter().map(|v| v.id.as_str()).collect();
    let mut selection = ComparisonSelection::new();

    for round in 0..4 {
        for (i, id) in ids.iter().enumerate() {
            if (i + round) % 3 == 0 {
                selection.remove(id);
            } else {
                selection.add(inventory.get(id).unwrap().clone());
            }
            assert!(selection.len() <= 3);
            let mut unique = selection.ids();
            unique.dedup();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), selection.len());
        }
    }
}

#[test]
fn test_card_flags_follow_selection() {
    let mut harness = SessionHarness::new();
    for id in ["1", "2", "3"] {
        harness.add(id);
    }
    let session = harness.session();
    let view = session.view();
    let cards = view.cards(session.selection());

    for card in cards {
        let selected = ["1", "2", "3"].contains(&card.vehicle.id.as_str());
        assert_eq!(card.in_compare, selected);
        assert!(!card.can_add_to_compare);
    }
}

#[test]
fn test_table_columns_follow_selection_order() {
    let mut harness = SessionHarness::new();
    harness.add("4");
    harness.add("1");

    let table = harness.session().selection().table();
    assert_eq!(table.headers, vec!["Honda Activa EV", "Speed 400"]);
    assert_eq!(
        table.row("Price").unwrap().values,
        vec!["₹85,000", "₹2,75,000"]
    );
    assert_eq!(harness.session().selection().cheapest(), Some("4"));
    assert_eq!(harness.session().selection().best_mileage(), Some("4"));
}
