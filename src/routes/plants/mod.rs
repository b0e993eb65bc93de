mod get;

pub use get::{list_plants, plant_detail};
