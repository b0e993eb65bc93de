use super::{DerivedCareState, PlantCatalogEntry, PlantingRecord};
use serde::Serialize;

/// One garden row: a planting joined with its catalog entry and derived care state.
///
/// Values are rebuilt on every aggregation pass and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPlanting {
    pub planting: PlantingRecord,
    pub plant: PlantCatalogEntry,
    pub care: DerivedCareState,
}

impl AggregatedPlanting {
    pub fn planting_id(&self) -> i64 {
        self.planting.planting_id
    }

    pub fn plant_id(&self) -> &str {
        &self.planting.plant_id
    }
}
