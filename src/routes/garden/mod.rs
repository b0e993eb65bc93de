mod delete;
mod get;
mod post;
mod water;

pub use delete::remove_planting;
pub use get::garden_overview;
pub use post::add_planting;
pub use water::water_planting;
