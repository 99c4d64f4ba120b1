//! The catalog store: an immutable, ordered inventory of vehicles.
//!
//! An `Inventory` is built once at start-up (from the built-in sample or a
//! JSON file) and shared by cheap clone afterwards. Order is significant: the
//! `default` sort of the filter-sort engine preserves it.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::vehicle::{FuelType, Vehicle};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone)]
pub struct Inventory {
    vehicles: Arc<[Vehicle]>,
}

impl Inventory {
    /// Build an inventory, rejecting duplicate ids and invalid records.
    pub fn new(vehicles: Vec<Vehicle>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            vehicle.validate()?;
            if !seen.insert(vehicle.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate vehicle id '{}'",
                    vehicle.id
                )));
            }
        }
        Ok(Self {
            vehicles: vehicles.into(),
        })
    }

    /// The six-bike showroom sample.
    pub fn sample() -> Self {
        Self {
            vehicles: sample_vehicles().into(),
        }
    }

    /// Parse a JSON array of vehicles.
    pub fn from_json(data: &str) -> CatalogResult<Self> {
        let vehicles: Vec<Vehicle> = serde_json::from_str(data)
            .map_err(|e| CatalogError::Serialization(format!("invalid inventory JSON: {e}")))?;
        Self::new(vehicles)
    }

    /// Load an inventory file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let inventory = Self::from_json(&data)?;
        info!(
            "Loaded {} vehicles from {}",
            inventory.len(),
            path.display()
        );
        Ok(inventory)
    }

    /// Load from `path` when given, otherwise fall back to the sample.
    pub fn load_or_sample(path: Option<&Path>) -> CatalogResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Like [`Inventory::get`] but reports unknown ids as `NotFound`.
    pub fn require(&self, id: &str) -> CatalogResult<&Vehicle> {
        self.get(id)
            .ok_or_else(|| CatalogError::NotFound(format!("vehicle '{id}'")))
    }

    /// Distinct brands in first-appearance order (brand dropdown).
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.vehicles
            .iter()
            .map(|v| v.brand.as_str())
            .filter(|brand| seen.insert(*brand))
            .collect()
    }

    /// Distinct fuel types in first-appearance order (fuel dropdown).
    pub fn fuel_types(&self) -> Vec<FuelType> {
        let mut seen = HashSet::new();
        self.vehicles
            .iter()
            .map(|v| v.fuel_type)
            .filter(|fuel| seen.insert(*fuel))
            .collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::sample()
    }
}

fn sample_vehicles() -> Vec<Vehicle> {
    let bike = |id: &str,
                name: &str,
                brand: &str,
                price: u64,
                image: &str,
                mileage: f64,
                fuel_type: FuelType,
                specs: [&str; 4],
                cylinders: u8,
                description: &str| Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        image: image.to_string(),
        mileage,
        fuel_type,
        engine: specs[0].to_string(),
        power: specs[1].to_string(),
        torque: specs[2].to_string(),
        rpm: specs[3].to_string(),
        cylinders,
        description: description.to_string(),
    };

    vec![
        bike(
            "1",
            "Speed 400",
            "Triumph",
            275_000,
            "/trumph.jpg",
            35.0,
            FuelType::Petrol,
            ["398cc", "40 HP", "37.5 Nm", "6500"],
            1,
            "The Speed 400 is a modern classic that combines retro styling with contemporary \
             performance. Perfect for city commutes and weekend adventures.",
        ),
        bike(
            "2",
            "Ather 450S",
            "Modern",
            150_000,
            "/evscoooter.jpg",
            120.0,
            FuelType::Electric,
            ["3kW Motor", "4 HP", "25 Nm", "N/A"],
            0,
            "The future of urban mobility. Zero emissions, low maintenance, and smart \
             connectivity features make this the perfect eco-friendly choice.",
        ),
        bike(
            "3",
            "Honda Unicorn",
            "Vintage",
            110_000,
            "/honda_unicorn.jpg",
            28.0,
            FuelType::Petrol,
            ["648cc", "47 HP", "52 Nm", "7250"],
            2,
            "Classic cafe racer styling meets modern engineering. This bike is perfect for \
             riders who appreciate timeless design and spirited performance.",
        ),
        bike(
            "4",
            "Honda Activa EV",
            "Electric",
            85_000,
            "/honda_activa_ev.jpg",
            80.0,
            FuelType::Electric,
            ["1.5kW Motor", "2 HP", "15 Nm", "N/A"],
            0,
            "Designed for the modern urban commuter. Lightweight, efficient, and packed with \
             smart features for the connected rider.",
        ),
        bike(
            "5",
            "Royal Enfield Continental GT 650",
            "Adventure",
            350_000,
            "/gt_650.jpg",
            32.0,
            FuelType::Petrol,
            ["390cc", "44 HP", "37 Nm", "9000"],
            1,
            "Built for adventure seekers. Whether its city streets or mountain trails, this \
             bike handles it all with confidence and style.",
        ),
        bike(
            "6",
            "Classic 350",
            "Heritage",
            185_000,
            "/classic-350.jpg",
            40.0,
            FuelType::Petrol,
            ["349cc", "20 HP", "27 Nm", "5250"],
            1,
            "Timeless design meets modern reliability. A perfect blend of classic styling and \
             contemporary engineering for the purist rider.",
        ),
    ]
}
