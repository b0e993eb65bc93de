use chrono::{DateTime, Utc};
use serde::Serialize;

/// A plant placed in the garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingRecord {
    pub planting_id: i64,

    /// Foreign key into the plant catalog.
    pub plant_id: String,
    pub planted_date: DateTime<Utc>,

    /// `None` is read as "watered when planted".
    pub last_watered_date: Option<DateTime<Utc>>,
}

impl PlantingRecord {
    pub fn last_watered_or_planted(&self) -> DateTime<Utc> {
        self.last_watered_date.unwrap_or(self.planted_date)
    }
}
