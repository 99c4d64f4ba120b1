use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Propulsion of a vehicle in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Petrol, FuelType::Electric, FuelType::Hybrid];

    pub const fn as_str(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = CatalogError;

    /// Exact, case-sensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == s)
            .ok_or_else(|| CatalogError::Parse(format!("unknown fuel type '{s}'")))
    }
}

/// A two-wheeler offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier within an inventory
    pub id: String,

    /// Model name shown on the card
    pub name: String,

    /// Brand (also the target of the exact-match brand filter)
    pub brand: String,

    /// Ex-showroom price in whole rupees
    pub price: u64,

    /// Image path or URL
    #[serde(default)]
    pub image: String,

    /// Efficiency figure; km/l for combustion, km per charge for electric
    pub mileage: f64,

    pub fuel_type: FuelType,

    #[serde(default)]
    pub engine: String,

    #[serde(default)]
    pub power: String,

    #[serde(default)]
    pub torque: String,

    /// Peak-power RPM as displayed ("N/A" for motors)
    #[serde(default)]
    pub rpm: String,

    #[serde(default)]
    pub cylinders: u8,

    #[serde(default)]
    pub description: String,
}

impl Vehicle {
    /// Create a new vehicle builder
    pub fn builder() -> VehicleBuilder {
        VehicleBuilder::default()
    }

    /// Whether the card shows the "EV" badge
    pub fn is_electric(&self) -> bool {
        self.fuel_type == FuelType::Electric
    }

    /// Check the record-level constraints that the type system cannot.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::Validation("vehicle id is empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "vehicle '{}' has an empty name",
                self.id
            )));
        }
        if self.brand.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "vehicle '{}' has an empty brand",
                self.id
            )));
        }
        if !self.mileage.is_finite() || self.mileage < 0.0 {
            return Err(CatalogError::Validation(format!(
                "vehicle '{}' has invalid mileage {}",
                self.id, self.mileage
            )));
        }
        Ok(())
    }
}

/// Builder for catalog vehicles
#[derive(Debug, Default)]
pub struct VehicleBuilder {
    id: Option<String>,
    name: Option<String>,
    brand: Option<String>,
    price: Option<u64>,
    mileage: Option<f64>,
    fuel_type: Option<FuelType>,
    image: String,
    engine: String,
    power: String,
    torque: String,
    rpm: String,
    cylinders: u8,
    description: String,
}

impl VehicleBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub const fn price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn mileage(mut self, mileage: f64) -> Self {
        self.mileage = Some(mileage);
        self
    }

    #[must_use]
    pub const fn fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set engine, power, torque and RPM in one go
    #[must_use]
    pub fn specs(
        mut self,
        engine: impl Into<String>,
        power: impl Into<String>,
        torque: impl Into<String>,
        rpm: impl Into<String>,
    ) -> Self {
        self.engine = engine.into();
        self.power = power.into();
        self.torque = torque.into();
        self.rpm = rpm.into();
        self
    }

    #[must_use]
    pub const fn cylinders(mut self, cylinders: u8) -> Self {
        self.cylinders = cylinders;
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Build the vehicle (returns error if required fields are missing or invalid)
    pub fn build(self) -> CatalogResult<Vehicle> {
        let missing = |field: &str| CatalogError::Validation(format!("{field} is required"));

        let vehicle = Vehicle {
            id: self.id.ok_or_else(|| missing("id"))?,
            name: self.name.ok_or_else(|| missing("name"))?,
            brand: self.brand.ok_or_else(|| missing("brand"))?,
            price: self.price.ok_or_else(|| missing("price"))?,
            image: self.image,
            mileage: self.mileage.ok_or_else(|| missing("mileage"))?,
            fuel_type: self.fuel_type.ok_or_else(|| missing("fuel_type"))?,
            engine: self.engine,
            power: self.power,
            torque: self.torque,
            rpm: self.rpm,
            cylinders: self.cylinders,
            description: self.description,
        };
        vehicle.validate()?;
        Ok(vehicle)
    }
}
