//! Search, filter and sort parameters for the catalog view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::vehicle::{FuelType, Vehicle};
use crate::config::{
    ALL_BRANDS, ALL_FUEL_TYPES, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN, PRICE_SLIDER_STEP,
};
use crate::error::CatalogError;

/// Closed price interval `[min, max]`.
///
/// `min <= max` is the caller's responsibility; an inverted range simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends.
    pub const fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Range from two slider thumbs: ordered, clamped to the slider bounds
    /// and snapped to the nearest slider step.
    pub fn from_slider(a: u64, b: u64) -> Self {
        let snap = |value: u64| {
            let clamped = value.clamp(PRICE_SLIDER_MIN, PRICE_SLIDER_MAX);
            let offset = clamped - PRICE_SLIDER_MIN;
            let steps = (offset + PRICE_SLIDER_STEP / 2) / PRICE_SLIDER_STEP;
            (PRICE_SLIDER_MIN + steps * PRICE_SLIDER_STEP).min(PRICE_SLIDER_MAX)
        };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self::new(snap(low), snap(high))
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(PRICE_SLIDER_MIN, PRICE_SLIDER_MAX)
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Inventory order
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    MileageDesc,
    BrandAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::MileageDesc,
        SortKey::BrandAsc,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::MileageDesc => "mileage-desc",
            SortKey::BrandAsc => "brand-asc",
        }
    }

    /// Label shown in the "Sort By" dropdown.
    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::MileageDesc => "Best Mileage",
            SortKey::BrandAsc => "Brand A-Z",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    /// Accepts the canonical names and the dropdown values of the web front-end.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "default" => Ok(SortKey::Default),
            "price-asc" | "price-low" => Ok(SortKey::PriceAsc),
            "price-desc" | "price-high" => Ok(SortKey::PriceDesc),
            "mileage-desc" | "mileage" => Ok(SortKey::MileageDesc),
            "brand-asc" | "brand" => Ok(SortKey::BrandAsc),
            other => Err(CatalogError::Parse(format!("unknown sort key '{other}'"))),
        }
    }
}

/// Interpret a brand dropdown value; the "all" sentinels map to `None`.
pub fn parse_brand_filter(value: &str) -> Option<String> {
    match value {
        "" | "all" | ALL_BRANDS => None,
        brand => Some(brand.to_string()),
    }
}

/// Interpret a fuel dropdown value; the "all" sentinels map to `None`.
pub fn parse_fuel_filter(value: &str) -> Result<Option<FuelType>, CatalogError> {
    match value {
        "" | "all" | ALL_FUEL_TYPES => Ok(None),
        fuel => fuel.parse().map(Some),
    }
}

/// The active search/filter/sort parameters of a catalog session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Case-insensitive substring searched in name and brand
    #[serde(default)]
    pub search_term: String,

    #[serde(default)]
    pub price_range: PriceRange,

    /// Exact, case-sensitive brand; `None` means all brands
    #[serde(default)]
    pub brand: Option<String>,

    /// `None` means all fuel types
    #[serde(default)]
    pub fuel_type: Option<FuelType>,

    #[serde(default)]
    pub sort_key: SortKey,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub const fn price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub const fn fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = Some(fuel_type);
        self
    }

    #[must_use]
    pub const fn sort_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// True when a vehicle passes all four filter predicates.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.matches_search(vehicle)
            && self.price_range.contains(vehicle.price)
            && self.brand.as_ref().map_or(true, |b| vehicle.brand == *b)
            && self.fuel_type.map_or(true, |f| vehicle.fuel_type == f)
    }

    fn matches_search(&self, vehicle: &Vehicle) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        vehicle.name.to_lowercase().contains(&needle)
            || vehicle.brand.to_lowercase().contains(&needle)
    }
}
