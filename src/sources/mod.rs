//! Catalog and planting sources.
//!
//! Both sources publish immutable snapshots through `tokio::sync::watch`, so a
//! subscriber that falls behind only ever sees the newest value. Every call to
//! `subscribe` starts a fresh sequence at the current snapshot.

mod catalog;
mod store;

use crate::domain::{PlantCatalogEntry, PlantingRecord};
use crate::error::GardenError;
use std::sync::Arc;
use tokio::sync::watch;

pub use catalog::MemoryCatalog;
pub use store::MemoryPlantingStore;

pub type Catalog = Arc<[PlantCatalogEntry]>;
pub type Plantings = Arc<[PlantingRecord]>;

pub trait PlantCatalogSource: Send + Sync {
    fn subscribe(&self) -> watch::Receiver<Catalog>;

    fn get(&self, plant_id: &str) -> Option<PlantCatalogEntry> {
        self.subscribe()
            .borrow()
            .iter()
            .find(|entry| entry.id == plant_id)
            .cloned()
    }
}

pub trait PlantingRecordSource: Send + Sync {
    /// Plantings in creation order.
    fn subscribe(&self) -> watch::Receiver<Plantings>;

    /// Plant `plant_id` now. Returns the new planting id.
    fn add_planting(&self, plant_id: &str) -> Result<i64, GardenError>;

    /// Record a watering at the current instant.
    fn water_planting(&self, planting_id: i64) -> Result<(), GardenError>;

    fn remove_planting(&self, planting_id: i64) -> Result<(), GardenError>;

    fn is_planted(&self, plant_id: &str) -> bool {
        self.subscribe()
            .borrow()
            .iter()
            .any(|record| record.plant_id == plant_id)
    }
}
