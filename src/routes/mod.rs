mod common;
mod garden;
mod health_check;
mod plants;

pub use garden::{add_planting, garden_overview, remove_planting, water_planting};
pub use health_check::health_check;
pub use plants::{list_plants, plant_detail};
