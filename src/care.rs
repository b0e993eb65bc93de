//! Watering status derivation.
//!
//! Turns a planting, its catalog entry and an instant into day counts and a
//! watering status. Formatting those values for display is left to callers.

use crate::domain::{DerivedCareState, PlantCatalogEntry, PlantingRecord, WateringStatus};
use crate::error::CareError;
use chrono::{DateTime, TimeDelta, Utc};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Whole days elapsed from `from` to `to`, rounded toward negative infinity.
pub fn whole_days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let span = to - from;
    // num_seconds truncates toward zero; step down for a negative remainder.
    let mut seconds = span.num_seconds();
    if span < TimeDelta::seconds(seconds) {
        seconds -= 1;
    }
    seconds.div_euclid(SECONDS_PER_DAY)
}

/// Derive the care state of `record` at `now`.
///
/// Fails with [`CareError::Configuration`] when the catalog entry carries a
/// watering interval of zero days or less.
pub fn compute(
    record: &PlantingRecord,
    entry: &PlantCatalogEntry,
    now: DateTime<Utc>,
) -> Result<DerivedCareState, CareError> {
    if entry.watering_interval_days <= 0 {
        return Err(CareError::Configuration {
            plant_id: entry.id.clone(),
            interval_days: entry.watering_interval_days,
        });
    }

    let days_since_planted = whole_days_between(record.planted_date, now);
    let days_since_last_watered = whole_days_between(record.last_watered_or_planted(), now);
    let watering_status = if days_since_last_watered >= entry.watering_interval_days {
        WateringStatus::Overdue
    } else {
        WateringStatus::UpToDate
    };

    Ok(DerivedCareState {
        days_since_planted,
        days_since_last_watered,
        watering_status,
    })
}
