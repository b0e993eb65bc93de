mod aggregated_planting;
mod care_state;
mod garden_view;
mod new_planting;
mod plant;
mod plant_detail;
mod planting_record;

pub use aggregated_planting::AggregatedPlanting;
pub use care_state::{DerivedCareState, WateringStatus};
pub use garden_view::GardenView;
pub use new_planting::{CreatedPlanting, NewPlanting};
pub use plant::PlantCatalogEntry;
pub use plant_detail::PlantDetail;
pub use planting_record::PlantingRecord;
