use super::AggregatedPlanting;
use crate::error::CareError;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response body of `GET /garden`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenView {
    pub version: u64,
    pub computed_at: DateTime<Utc>,
    pub plantings: Vec<AggregatedPlanting>,
    pub skipped: usize,
    pub diagnostics: Vec<CareError>,
}
