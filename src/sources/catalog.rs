use super::{Catalog, PlantCatalogSource};
use crate::domain::PlantCatalogEntry;
use crate::error::CatalogError;
use std::path::Path;
use tokio::sync::watch;

/// Plant catalog held in memory, seeded from a JSON array.
pub struct MemoryCatalog {
    entries: watch::Sender<Catalog>,
}

impl MemoryCatalog {
    pub fn new(entries: Vec<PlantCatalogEntry>) -> Self {
        let (entries, _) = watch::channel(Catalog::from(entries));
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<PlantCatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.as_ref().display(),
            plants = catalog.len(),
            "loaded plant catalog"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the current entries.
    pub fn entries(&self) -> Catalog {
        self.entries.borrow().clone()
    }

    pub fn replace(&self, entries: Vec<PlantCatalogEntry>) {
        self.entries.send_replace(Catalog::from(entries));
    }

    /// Insert `entry`, or overwrite the entry with the same id in place.
    pub fn upsert(&self, entry: PlantCatalogEntry) {
        self.entries.send_modify(|entries| {
            let mut next = entries.to_vec();
            match next.iter_mut().find(|existing| existing.id == entry.id) {
                Some(existing) => *existing = entry,
                None => next.push(entry),
            }
            *entries = next.into();
        });
    }

    /// Returns `false` when no entry had that id.
    pub fn remove(&self, plant_id: &str) -> bool {
        self.entries.send_if_modified(|entries| {
            if !entries.iter().any(|entry| entry.id == plant_id) {
                return false;
            }
            *entries = entries
                .iter()
                .filter(|entry| entry.id != plant_id)
                .cloned()
                .collect();
            true
        })
    }
}

impl PlantCatalogSource for MemoryCatalog {
    fn subscribe(&self) -> watch::Receiver<Catalog> {
        self.entries.subscribe()
    }

    fn get(&self, plant_id: &str) -> Option<PlantCatalogEntry> {
        self.entries
            .borrow()
            .iter()
            .find(|entry| entry.id == plant_id)
            .cloned()
    }
}
