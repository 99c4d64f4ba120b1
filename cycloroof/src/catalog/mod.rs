pub mod compare;
pub mod inventory;
pub mod query;
pub mod vehicle;
pub mod view;

pub use compare::{ComparisonRow, ComparisonSelection, ComparisonTable};
pub use inventory::Inventory;
pub use query::{parse_brand_filter, parse_fuel_filter, PriceRange, Query, SortKey};
pub use vehicle::{FuelType, Vehicle, VehicleBuilder};
pub use view::{compute_view, locale_compare, CatalogCard, CatalogView};
