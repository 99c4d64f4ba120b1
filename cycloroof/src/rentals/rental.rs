use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::FuelType;
use crate::config::CURRENCY_SYMBOL;
use crate::error::{CatalogError, CatalogResult};

/// Rental period offered in the duration dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentalDuration {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl RentalDuration {
    pub const ALL: [RentalDuration; 4] = [
        RentalDuration::Hourly,
        RentalDuration::Daily,
        RentalDuration::Weekly,
        RentalDuration::Monthly,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RentalDuration::Hourly => "Hourly",
            RentalDuration::Daily => "Daily",
            RentalDuration::Weekly => "Weekly",
            RentalDuration::Monthly => "Monthly",
        }
    }

    /// Suffix used in rate strings ("/hr", "/day", ...).
    pub const fn unit(self) -> &'static str {
        match self {
            RentalDuration::Hourly => "hr",
            RentalDuration::Daily => "day",
            RentalDuration::Weekly => "week",
            RentalDuration::Monthly => "month",
        }
    }

    /// Lenient parse for dropdown values: anything unrecognised (including
    /// the empty "Select duration" placeholder) is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

impl fmt::Display for RentalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RentalDuration {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RentalDuration::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CatalogError::Parse(format!("unknown rental duration '{s}'")))
    }
}

/// A resolved rental price for one duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    pub amount: u64,
    pub duration: RentalDuration,
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{CURRENCY_SYMBOL}{}/{}",
            self.amount,
            self.duration.unit()
        )
    }
}

/// A bike offered for short-term rental
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalVehicle {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub image: String,
    pub hourly_rate: u64,
    pub daily_rate: u64,
    pub weekly_rate: u64,
    pub fuel_type: FuelType,
    /// Customer rating out of 5
    pub rating: f32,
    /// `false` renders as "Rented" and disables booking
    pub available: bool,
    pub location: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl RentalVehicle {
    /// Rate for a duration; there is no monthly field, a month is four weeks.
    pub const fn rate(&self, duration: RentalDuration) -> Rate {
        let amount = match duration {
            RentalDuration::Hourly => self.hourly_rate,
            RentalDuration::Daily => self.daily_rate,
            RentalDuration::Weekly => self.weekly_rate,
            RentalDuration::Monthly => self.weekly_rate.saturating_mul(4),
        };
        Rate { amount, duration }
    }

    /// Rate for an optional duration, falling back to hourly.
    pub const fn rate_or_hourly(&self, duration: Option<RentalDuration>) -> Rate {
        match duration {
            Some(duration) => self.rate(duration),
            None => self.rate(RentalDuration::Hourly),
        }
    }

    /// Rate string for a raw dropdown label; unknown labels fall back to hourly.
    pub fn rate_label(&self, label: &str) -> String {
        self.rate_or_hourly(RentalDuration::from_label(label))
            .to_string()
    }

    pub fn is_electric(&self) -> bool {
        self.fuel_type == FuelType::Electric
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::Validation("rental id is empty".into()));
        }
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogError::Validation(format!(
                "rental '{}' has rating {} outside 0-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}
