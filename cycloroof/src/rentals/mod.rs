pub mod fleet;
pub mod rental;

pub use fleet::{RentalFleet, RENTAL_LOCATIONS};
pub use rental::{Rate, RentalDuration, RentalVehicle};
