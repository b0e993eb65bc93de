use super::{Catalog, PlantingRecordSource, Plantings};
use crate::clock::Clock;
use crate::domain::PlantingRecord;
use crate::error::GardenError;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::watch;

/// Planting records held in memory, in creation order.
///
/// Writes swap in a new immutable list, so snapshots handed out earlier stay
/// untouched.
pub struct MemoryPlantingStore {
    records: watch::Sender<Plantings>,
    catalog: watch::Receiver<Catalog>,
    clock: Arc<dyn Clock>,
    next_id: AtomicI64,
}

impl MemoryPlantingStore {
    pub fn new(catalog: watch::Receiver<Catalog>, clock: Arc<dyn Clock>) -> Self {
        Self::with_records(Vec::new(), catalog, clock)
    }

    /// Start from existing records, e.g. ones restored from elsewhere.
    /// Catalog references are not checked here; the aggregator reports dangling ones.
    pub fn with_records(
        records: Vec<PlantingRecord>,
        catalog: watch::Receiver<Catalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let next_id = records.iter().map(|r| r.planting_id).max().unwrap_or(0) + 1;
        let (records, _) = watch::channel(Plantings::from(records));
        Self {
            records,
            catalog,
            clock,
            next_id: AtomicI64::new(next_id),
        }
    }

    pub fn records(&self) -> Plantings {
        self.records.borrow().clone()
    }

    /// Replace the record of `planting_id` with `edit` applied to a copy of it.
    fn edit(
        &self,
        planting_id: i64,
        edit: impl FnOnce(&mut Vec<PlantingRecord>, usize),
    ) -> Result<(), GardenError> {
        let mut found = false;
        self.records.send_if_modified(|records| {
            let Some(position) = records.iter().position(|r| r.planting_id == planting_id) else {
                return false;
            };
            let mut next = records.to_vec();
            edit(&mut next, position);
            *records = next.into();
            found = true;
            true
        });

        if found {
            Ok(())
        } else {
            Err(GardenError::PlantingNotFound(planting_id))
        }
    }
}

impl PlantingRecordSource for MemoryPlantingStore {
    fn subscribe(&self) -> watch::Receiver<Plantings> {
        self.records.subscribe()
    }

    fn add_planting(&self, plant_id: &str) -> Result<i64, GardenError> {
        if !self.catalog.borrow().iter().any(|entry| entry.id == plant_id) {
            return Err(GardenError::UnknownPlant(plant_id.to_owned()));
        }

        let now = self.clock.now();
        let mut created = None;
        self.records.send_if_modified(|records| {
            if records.iter().any(|r| r.plant_id == plant_id) {
                return false;
            }
            let planting_id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let mut next = records.to_vec();
            next.push(PlantingRecord {
                planting_id,
                plant_id: plant_id.to_owned(),
                planted_date: now,
                last_watered_date: Some(now),
            });
            *records = next.into();
            created = Some(planting_id);
            true
        });

        created.ok_or_else(|| GardenError::AlreadyPlanted(plant_id.to_owned()))
    }

    fn water_planting(&self, planting_id: i64) -> Result<(), GardenError> {
        let now = self.clock.now();
        self.edit(planting_id, |records, position| {
            records[position].last_watered_date = Some(now);
        })
    }

    fn remove_planting(&self, planting_id: i64) -> Result<(), GardenError> {
        self.edit(planting_id, |records, position| {
            records.remove(position);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::PlantCatalogEntry;
    use crate::sources::{MemoryCatalog, PlantCatalogSource};
    use chrono::{TimeZone, Utc};

    fn plant(id: &str) -> PlantCatalogEntry {
        PlantCatalogEntry {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            grow_zone_number: 5,
            watering_interval_days: 3,
            image_url: String::new(),
        }
    }

    fn setup() -> (MemoryCatalog, Arc<FixedClock>, MemoryPlantingStore) {
        let catalog = MemoryCatalog::new(vec![plant("basil"), plant("mint")]);
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        ));
        let store = MemoryPlantingStore::new(catalog.subscribe(), clock.clone());
        (catalog, clock, store)
    }

    #[test]
    fn adding_stamps_both_dates_with_now() {
        let (_catalog, clock, store) = setup();
        let id = store.add_planting("basil").unwrap();

        let records = store.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].planting_id, id);
        assert_eq!(records[0].planted_date, clock.now());
        assert_eq!(records[0].last_watered_date, Some(clock.now()));
        assert!(store.is_planted("basil"));
        assert!(!store.is_planted("mint"));
    }

    #[test]
    fn one_planting_per_plant() {
        let (_catalog, _clock, store) = setup();
        store.add_planting("basil").unwrap();

        assert_eq!(
            store.add_planting("basil"),
            Err(GardenError::AlreadyPlanted("basil".into()))
        );
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn unknown_plants_are_rejected() {
        let (_catalog, _clock, store) = setup();
        assert_eq!(
            store.add_planting("triffid"),
            Err(GardenError::UnknownPlant("triffid".into()))
        );
    }

    #[test]
    fn watering_only_moves_the_watering_date() {
        let (_catalog, clock, store) = setup();
        let id = store.add_planting("mint").unwrap();
        let planted = clock.now();
        let before = store.records();

        clock.advance(chrono::Duration::days(2));
        store.water_planting(id).unwrap();

        let after = store.records();
        assert_eq!(after[0].planted_date, planted);
        assert_eq!(after[0].last_watered_date, Some(clock.now()));
        // Earlier snapshots are not rewritten.
        assert_eq!(before[0].last_watered_date, Some(planted));
    }

    #[test]
    fn ids_keep_growing_after_removal() {
        let (_catalog, _clock, store) = setup();
        let basil = store.add_planting("basil").unwrap();
        store.remove_planting(basil).unwrap();
        let again = store.add_planting("basil").unwrap();

        assert!(again > basil);
        assert_eq!(
            store.remove_planting(basil),
            Err(GardenError::PlantingNotFound(basil))
        );
        assert_eq!(
            store.water_planting(basil),
            Err(GardenError::PlantingNotFound(basil))
        );
    }
}
