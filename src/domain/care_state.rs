use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WateringStatus {
    UpToDate,
    Overdue,
}

impl WateringStatus {
    pub fn is_overdue(self) -> bool {
        self == WateringStatus::Overdue
    }
}

/// Care information derived from a planting and its catalog entry at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedCareState {
    pub days_since_planted: i64,
    pub days_since_last_watered: i64,
    pub watering_status: WateringStatus,
}
