//! Configuration constants for the catalog application.
//!
//! Centralizes the slider bounds, selection cap and sentinel values used by
//! the dropdowns, plus the environment-driven `CatalogConfig`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Maximum number of vehicles in a comparison selection.
pub const MAX_COMPARE_SELECTION: usize = 3;

/// Lower bound of the catalog price slider.
pub const PRICE_SLIDER_MIN: u64 = 50_000;

/// Upper bound of the catalog price slider.
pub const PRICE_SLIDER_MAX: u64 = 500_000;

/// Step of the catalog price slider.
pub const PRICE_SLIDER_STEP: u64 = 10_000;

/// Dropdown value meaning "no brand filter".
pub const ALL_BRANDS: &str = "all-brands";

/// Dropdown value meaning "no fuel type filter".
pub const ALL_FUEL_TYPES: &str = "all-types";

/// Currency symbol used for every displayed price.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Environment variable pointing at a JSON inventory file.
pub const INVENTORY_PATH_ENV: &str = "CYCLOROOF_INVENTORY";

/// Environment variable pointing at a JSON rental fleet file.
pub const RENTALS_PATH_ENV: &str = "CYCLOROOF_RENTALS";

/// Start-up configuration for a catalog process.
///
/// Both paths are optional; without them the built-in sample data is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file replacing the built-in catalog inventory.
    pub inventory_path: Option<PathBuf>,
    /// JSON file replacing the built-in rental fleet.
    pub rentals_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };
        Self {
            inventory_path: path(INVENTORY_PATH_ENV),
            rentals_path: path(RENTALS_PATH_ENV),
        }
    }

    /// Apply command-line overrides on top of the resolved values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        inventory_path: Option<PathBuf>,
        rentals_path: Option<PathBuf>,
    ) -> Self {
        if inventory_path.is_some() {
            self.inventory_path = inventory_path;
        }
        if rentals_path.is_some() {
            self.rentals_path = rentals_path;
        }
        self
    }
}
