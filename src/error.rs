use serde::Serialize;
use thiserror::Error;

/// Per-item failures of the care pipeline. None of them abort a pass: the
/// offending planting or input is dropped and the error is reported alongside.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CareError {
    #[error("plant `{plant_id}` has a non-positive watering interval ({interval_days} days)")]
    #[serde(rename_all = "camelCase")]
    Configuration { plant_id: String, interval_days: i64 },

    #[error("planting {planting_id} references unknown plant `{plant_id}`")]
    #[serde(rename_all = "camelCase")]
    MissingReference { planting_id: i64, plant_id: String },

    #[error("ignored {field} report of {value}")]
    #[serde(rename_all = "camelCase")]
    InvalidInput { field: &'static str, value: f32 },
}

/// Write-side failures of the planting store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GardenError {
    #[error("plant `{0}` is not in the catalog")]
    UnknownPlant(String),

    #[error("plant `{0}` is already in the garden")]
    AlreadyPlanted(String),

    #[error("planting {0} does not exist")]
    PlantingNotFound(i64),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read plant catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse plant catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("{op} at index {index} is out of range for a list of {len}")]
    OutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },
}
