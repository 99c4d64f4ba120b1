//! The rental fleet: a fixed list of rentable bikes and the cities served.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use super::rental::RentalVehicle;
use crate::catalog::FuelType;
use crate::error::{CatalogError, CatalogResult};

/// Cities listed in the location dropdown.
pub const RENTAL_LOCATIONS: [&str; 6] = [
    "Mumbai Central",
    "Delhi NCR",
    "Bangalore",
    "Pune",
    "Chennai",
    "Hyderabad",
];

#[derive(Debug, Clone)]
pub struct RentalFleet {
    rentals: Arc<[RentalVehicle]>,
}

impl RentalFleet {
    pub fn new(rentals: Vec<RentalVehicle>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(rentals.len());
        for rental in &rentals {
            rental.validate()?;
            if !seen.insert(rental.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate rental id '{}'",
                    rental.id
                )));
            }
        }
        Ok(Self {
            rentals: rentals.into(),
        })
    }

    pub fn sample() -> Self {
        Self {
            rentals: sample_rentals().into(),
        }
    }

    pub fn from_json(data: &str) -> CatalogResult<Self> {
        let rentals: Vec<RentalVehicle> = serde_json::from_str(data)
            .map_err(|e| CatalogError::Serialization(format!("invalid rentals JSON: {e}")))?;
        Self::new(rentals)
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let fleet = Self::from_json(&data)?;
        info!("Loaded {} rentals from {}", fleet.len(), path.display());
        Ok(fleet)
    }

    pub fn load_or_sample(path: Option<&Path>) -> CatalogResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::sample()),
        }
    }

    pub fn rentals(&self) -> &[RentalVehicle] {
        &self.rentals
    }

    pub fn len(&self) -> usize {
        self.rentals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rentals.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RentalVehicle> {
        self.rentals.iter().find(|r| r.id == id)
    }

    pub fn require(&self, id: &str) -> CatalogResult<&RentalVehicle> {
        self.get(id)
            .ok_or_else(|| CatalogError::NotFound(format!("rental '{id}'")))
    }

    /// Rentals that can be booked right now.
    pub fn available(&self) -> impl Iterator<Item = &RentalVehicle> {
        self.rentals.iter().filter(|r| r.available)
    }

    pub fn locations(&self) -> &'static [&'static str] {
        &RENTAL_LOCATIONS
    }

    /// "Starting from" figure in the stats strip.
    pub fn starting_hourly_rate(&self) -> Option<u64> {
        self.rentals.iter().map(|r| r.hourly_rate).min()
    }
}

impl Default for RentalFleet {
    fn default() -> Self {
        Self::sample()
    }
}

fn sample_rentals() -> Vec<RentalVehicle> {
    let rental = |id: &str,
                  name: &str,
                  brand: &str,
                  rates: [u64; 3],
                  fuel_type: FuelType,
                  rating: f32,
                  available: bool,
                  location: &str,
                  features: [&str; 3]| RentalVehicle {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        image: String::new(),
        hourly_rate: rates[0],
        daily_rate: rates[1],
        weekly_rate: rates[2],
        fuel_type,
        rating,
        available,
        location: location.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    };

    vec![
        rental(
            "1",
            "Speed 400",
            "Triumph",
            [150, 1200, 7500],
            FuelType::Petrol,
            4.8,
            true,
            "Mumbai Central",
            ["Helmet Included", "Insurance Covered", "Roadside Assistance"],
        ),
        rental(
            "2",
            "Electric Scooter Pro",
            "Modern",
            [80, 600, 3500],
            FuelType::Electric,
            4.6,
            true,
            "Delhi NCR",
            ["Eco Friendly", "Silent Operation", "App Connected"],
        ),
        rental(
            "3",
            "Cafe Racer 650",
            "Vintage",
            [200, 1500, 9000],
            FuelType::Petrol,
            4.9,
            false,
            "Bangalore",
            ["Premium Bike", "Vintage Style", "Performance Focused"],
        ),
        rental(
            "4",
            "Urban E-Bike",
            "Electric",
            [50, 400, 2500],
            FuelType::Electric,
            4.4,
            true,
            "Pune",
            ["Lightweight", "City Commute", "Budget Friendly"],
        ),
        rental(
            "5",
            "Adventure 390",
            "Adventure",
            [180, 1400, 8500],
            FuelType::Petrol,
            4.7,
            true,
            "Chennai",
            ["Off-road Ready", "Long Distance", "Adventure Gear"],
        ),
        rental(
            "6",
            "Classic 350",
            "Heritage",
            [120, 900, 5500],
            FuelType::Petrol,
            4.5,
            true,
            "Hyderabad",
            ["Classic Style", "Comfortable Ride", "Reliable"],
        ),
    ]
}
