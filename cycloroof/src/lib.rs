pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod rentals;
pub mod session;

pub use catalog::{
    compute_view, CatalogView, ComparisonSelection, FuelType, Inventory, PriceRange, Query,
    SortKey, Vehicle,
};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use rentals::{Rate, RentalDuration, RentalFleet, RentalVehicle};
pub use session::{Page, Screen, Session};
