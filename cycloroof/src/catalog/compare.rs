use serde::{Deserialize, Serialize};

use super::vehicle::Vehicle;
use crate::config::MAX_COMPARE_SELECTION;
use crate::error::CatalogError;
use crate::format::{format_mileage, format_price};

/// Bounded, insertion-ordered set of vehicles chosen for side-by-side comparison.
///
/// Holds at most [`MAX_COMPARE_SELECTION`] entries with distinct ids. Adding
/// past the cap or adding a duplicate is a silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SelectionRecord")]
pub struct ComparisonSelection {
    vehicles: Vec<Vehicle>,
}

/// Wire shape of a selection before the cap and uniqueness checks.
#[derive(Deserialize)]
struct SelectionRecord {
    vehicles: Vec<Vehicle>,
}

impl TryFrom<SelectionRecord> for ComparisonSelection {
    type Error = CatalogError;

    fn try_from(record: SelectionRecord) -> Result<Self, Self::Error> {
        let mut selection = ComparisonSelection::new();
        for vehicle in record.vehicles {
            let id = vehicle.id.clone();
            if !selection.add(vehicle) {
                return Err(CatalogError::Validation(format!(
                    "cannot restore comparison: vehicle '{id}' is a duplicate or exceeds {MAX_COMPARE_SELECTION} entries"
                )));
            }
        }
        Ok(selection)
    }
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vehicle if there is room and it is not already selected.
    /// Returns whether the selection changed.
    pub fn add(&mut self, vehicle: Vehicle) -> bool {
        if !self.can_add(&vehicle.id) {
            return false;
        }
        self.vehicles.push(vehicle);
        true
    }

    /// Remove the vehicle with `id`, keeping the order of the rest.
    /// Returns whether the selection changed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.vehicles.len();
        self.vehicles.retain(|v| v.id != id);
        self.vehicles.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.vehicles.iter().any(|v| v.id == id)
    }

    /// Whether the "add to compare" affordance is enabled for `id`.
    pub fn can_add(&self, id: &str) -> bool {
        !self.is_full() && !self.contains(id)
    }

    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= MAX_COMPARE_SELECTION
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Drop every selected vehicle.
    pub fn clear(&mut self) {
        self.vehicles.clear();
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn ids(&self) -> Vec<&str> {
        self.vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    /// Id of the lowest-priced selected vehicle (first wins on ties).
    pub fn cheapest(&self) -> Option<&str> {
        self.vehicles
            .iter()
            .reduce(|best, v| if v.price < best.price { v } else { best })
            .map(|v| v.id.as_str())
    }

    /// Id of the most efficient selected vehicle (first wins on ties).
    pub fn best_mileage(&self) -> Option<&str> {
        self.vehicles
            .iter()
            .reduce(|best, v| if v.mileage > best.mileage { v } else { best })
            .map(|v| v.id.as_str())
    }

    /// Side-by-side specification table, one column per selected vehicle.
    pub fn table(&self) -> ComparisonTable {
        let vehicles = self.vehicles.as_slice();
        ComparisonTable {
            headers: vehicles.iter().map(|v| v.name.clone()).collect(),
            rows: vec![
                table_row(vehicles, "Price", |v| format_price(v.price)),
                table_row(vehicles, "Mileage", |v| format_mileage(v.mileage)),
                table_row(vehicles, "Fuel Type", |v| v.fuel_type.to_string()),
                table_row(vehicles, "Engine", |v| v.engine.clone()),
                table_row(vehicles, "Power", |v| v.power.clone()),
                table_row(vehicles, "Torque", |v| v.torque.clone()),
                table_row(vehicles, "Max RPM", |v| v.rpm.clone()),
                table_row(vehicles, "Cylinders", |v| v.cylinders.to_string()),
            ],
        }
    }
}

fn table_row(
    vehicles: &[Vehicle],
    label: &str,
    cell: impl Fn(&Vehicle) -> String,
) -> ComparisonRow {
    ComparisonRow {
        label: label.to_string(),
        values: vehicles.iter().map(cell).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    /// Vehicle names in selection order
    pub headers: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}
