//! The filter-sort engine.
//!
//! `compute_view` is a pure function of its two arguments: it filters the
//! inventory with every predicate of the query, then applies a stable sort
//! selected by the query's sort key. Nothing is cached; callers recompute
//! after each query mutation.

use std::cmp::Ordering;

use deunicode::deunicode;
use serde::Serialize;

use super::compare::ComparisonSelection;
use super::query::{Query, SortKey};
use super::vehicle::Vehicle;
use crate::config::MAX_COMPARE_SELECTION;

/// Filter then stably sort `inventory` according to `query`.
///
/// The returned vector borrows from `inventory` and never reorders or
/// mutates it. An empty result means "no matches", not an error.
pub fn compute_view<'a>(inventory: &'a [Vehicle], query: &Query) -> Vec<&'a Vehicle> {
    let mut view: Vec<&Vehicle> = inventory.iter().filter(|v| query.matches(v)).collect();

    // `sort_by` is stable, so equal keys keep their filtered order.
    match query.sort_key {
        SortKey::Default => {}
        SortKey::PriceAsc => view.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => view.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::MileageDesc => view.sort_by(|a, b| b.mileage.total_cmp(&a.mileage)),
        SortKey::BrandAsc => view.sort_by(|a, b| locale_compare(&a.brand, &b.brand)),
    }

    view
}

/// Locale-aware ordering for display strings.
///
/// Both sides are transliterated to ASCII and compared case-insensitively,
/// so accented and non-Latin letters sort next to their base letters. On a
/// full tie, lower case sorts before upper case and the unaccented spelling
/// before the accented one.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let (plain_a, plain_b) = (deunicode(a), deunicode(b));

    plain_a
        .to_lowercase()
        .cmp(&plain_b.to_lowercase())
        .then_with(|| lowercase_first(&plain_a, &plain_b))
        .then_with(|| a.cmp(b))
}

fn lowercase_first(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            }
        })
}

/// A computed catalog page: the matching vehicles plus the inventory total.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    pub vehicles: Vec<&'a Vehicle>,
    pub total: usize,
}

impl<'a> CatalogView<'a> {
    pub fn new(inventory: &'a [Vehicle], query: &Query) -> Self {
        Self {
            vehicles: compute_view(inventory, query),
            total: inventory.len(),
        }
    }

    pub fn shown(&self) -> usize {
        self.vehicles.len()
    }

    /// Triggers the "No bikes found" state.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Results-count line above the grid.
    pub fn summary(&self) -> String {
        format!("Showing {} of {} bikes", self.shown(), self.total)
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    /// Per-card state for the "add to compare" affordance.
    pub fn cards(&self, selection: &ComparisonSelection) -> Vec<CatalogCard<'a>> {
        self.vehicles
            .iter()
            .map(|&vehicle| {
                let in_compare = selection.contains(&vehicle.id);
                CatalogCard {
                    vehicle,
                    in_compare,
                    can_add_to_compare: !in_compare && selection.len() < MAX_COMPARE_SELECTION,
                }
            })
            .collect()
    }
}

/// One vehicle card with its compare-button state
#[derive(Debug, Clone, Serialize)]
pub struct CatalogCard<'a> {
    pub vehicle: &'a Vehicle,
    /// Renders as "Added"
    pub in_compare: bool,
    /// Compare button enabled
    pub can_add_to_compare: bool,
}
