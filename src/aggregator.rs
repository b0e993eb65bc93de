//! Live garden aggregation.
//!
//! Joins the planting records with the plant catalog, derives care state for
//! each planting and publishes the result as an immutable [`GardenSnapshot`].
//! Snapshots go out through a `watch` channel: a slow consumer never gets a
//! backlog, only the newest snapshot.

use crate::care;
use crate::clock::Clock;
use crate::diff::{ListDiffer, ListEdit};
use crate::domain::{AggregatedPlanting, GardenView, PlantCatalogEntry, PlantingRecord};
use crate::error::CareError;
use crate::sources::{Catalog, PlantCatalogSource, PlantingRecordSource, Plantings};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};

/// Result of one join pass.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub plantings: Vec<AggregatedPlanting>,
    /// One entry per planting left out of `plantings`.
    pub diagnostics: Vec<CareError>,
}

/// Join `plantings` with `catalog` at `now`, keeping the plantings' order.
///
/// A planting is skipped, with a diagnostic, when its plant is missing from
/// the catalog or its catalog entry is unusable.
pub fn aggregate(
    catalog: &[PlantCatalogEntry],
    plantings: &[PlantingRecord],
    now: DateTime<Utc>,
) -> Aggregation {
    let by_id: HashMap<&str, &PlantCatalogEntry> = catalog
        .iter()
        .map(|entry| (entry.id.as_str(), entry))
        .collect();

    let mut aggregation = Aggregation::default();
    for record in plantings {
        let Some(entry) = by_id.get(record.plant_id.as_str()) else {
            aggregation.diagnostics.push(CareError::MissingReference {
                planting_id: record.planting_id,
                plant_id: record.plant_id.clone(),
            });
            continue;
        };

        match care::compute(record, entry, now) {
            Ok(care) => aggregation.plantings.push(AggregatedPlanting {
                planting: record.clone(),
                plant: (*entry).clone(),
                care,
            }),
            Err(error) => aggregation.diagnostics.push(error),
        }
    }
    aggregation
}

/// One published state of the garden.
#[derive(Debug, Clone)]
pub struct GardenSnapshot {
    /// Increases by one per aggregation pass.
    pub version: u64,
    pub computed_at: DateTime<Utc>,
    pub plantings: Arc<[AggregatedPlanting]>,
    pub diagnostics: Arc<[CareError]>,
}

impl GardenSnapshot {
    fn compute(version: u64, catalog: &Catalog, plantings: &Plantings, now: DateTime<Utc>) -> Self {
        let aggregation = aggregate(catalog, plantings, now);
        for diagnostic in &aggregation.diagnostics {
            match diagnostic {
                CareError::MissingReference { planting_id, plant_id } => {
                    tracing::warn!(version, planting_id, %plant_id, error = %diagnostic, "skipped planting")
                }
                CareError::Configuration { plant_id, .. } => {
                    tracing::warn!(version, %plant_id, error = %diagnostic, "skipped planting")
                }
                CareError::InvalidInput { .. } => {
                    tracing::warn!(version, error = %diagnostic, "skipped planting")
                }
            }
        }
        tracing::debug!(
            version,
            plantings = aggregation.plantings.len(),
            skipped = aggregation.diagnostics.len(),
            "aggregated garden"
        );

        Self {
            version,
            computed_at: now,
            plantings: aggregation.plantings.into(),
            diagnostics: aggregation.diagnostics.into(),
        }
    }

    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn to_view(&self) -> GardenView {
        GardenView {
            version: self.version,
            computed_at: self.computed_at,
            plantings: self.plantings.to_vec(),
            skipped: self.skipped(),
            diagnostics: self.diagnostics.to_vec(),
        }
    }
}

/// Owns the aggregation task. Dropping it stops the task and its refresh timer.
pub struct GardenAggregator {
    snapshots: watch::Receiver<GardenSnapshot>,
    task: JoinHandle<()>,
}

impl GardenAggregator {
    /// Compute the first snapshot right away, then follow both sources on a
    /// background task. With `refresh` set, the garden is also re-aggregated
    /// on that period so day counts roll over without upstream changes.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        catalog: &dyn PlantCatalogSource,
        records: &dyn PlantingRecordSource,
        clock: Arc<dyn Clock>,
        refresh: Option<Duration>,
    ) -> Self {
        let mut catalog = catalog.subscribe();
        let mut records = records.subscribe();

        let catalog_now = catalog.borrow_and_update().clone();
        let records_now = records.borrow_and_update().clone();
        let first = GardenSnapshot::compute(1, &catalog_now, &records_now, clock.now());
        let (sender, snapshots) = watch::channel(first);
        let task = tokio::spawn(follow(catalog, records, sender, clock, refresh));

        Self { snapshots, task }
    }

    /// The newest snapshot.
    pub fn snapshot(&self) -> GardenSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn feed(&self) -> GardenFeed {
        GardenFeed::new(self.snapshots.clone(), ListDiffer::default())
    }

    pub fn shutdown(self) {}
}

impl Drop for GardenAggregator {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn follow(
    mut catalog: watch::Receiver<Catalog>,
    mut records: watch::Receiver<Plantings>,
    snapshots: watch::Sender<GardenSnapshot>,
    clock: Arc<dyn Clock>,
    refresh: Option<Duration>,
) {
    let mut ticker = refresh.map(|period| {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    });
    let refreshing = ticker.is_some();
    let mut catalog_open = true;
    let mut records_open = true;
    let mut version = snapshots.borrow().version;

    loop {
        tokio::select! {
            changed = catalog.changed(), if catalog_open => {
                if changed.is_err() {
                    tracing::debug!("catalog source closed");
                    catalog_open = false;
                    continue;
                }
            }
            changed = records.changed(), if records_open => {
                if changed.is_err() {
                    tracing::debug!("planting source closed");
                    records_open = false;
                    continue;
                }
            }
            _ = tick(&mut ticker), if refreshing && (catalog_open || records_open) => {}
            else => break,
        }

        // Both marks are cleared here so a change seen by this pass does not
        // trigger another one.
        let catalog_now = catalog.borrow_and_update().clone();
        let records_now = records.borrow_and_update().clone();
        version += 1;
        snapshots.send_replace(GardenSnapshot::compute(
            version,
            &catalog_now,
            &records_now,
            clock.now(),
        ));
    }
    tracing::debug!(version, "garden aggregation stopped");
}

async fn tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}

/// A snapshot together with the edits that turn the previously delivered
/// list into this one.
#[derive(Debug, Clone)]
pub struct GardenUpdate {
    pub snapshot: GardenSnapshot,
    pub edits: Vec<ListEdit>,
}

/// Consumer side of the aggregator. Keeps the last snapshot it handed out so
/// each update can carry an edit script for incremental rendering.
pub struct GardenFeed {
    snapshots: watch::Receiver<GardenSnapshot>,
    delivered: Option<GardenSnapshot>,
    differ: ListDiffer,
}

impl GardenFeed {
    pub fn new(snapshots: watch::Receiver<GardenSnapshot>, differ: ListDiffer) -> Self {
        Self {
            snapshots,
            delivered: None,
            differ,
        }
    }

    /// The first call returns the current snapshot at once. Later calls wait for
    /// a newer one, skipping any produced in between. `None` once the
    /// aggregator is gone.
    pub async fn next(&mut self) -> Option<GardenUpdate> {
        if self.delivered.is_some() && self.snapshots.changed().await.is_err() {
            return None;
        }

        let snapshot = self.snapshots.borrow_and_update().clone();
        let previous: &[AggregatedPlanting] = match &self.delivered {
            Some(delivered) => &delivered.plantings[..],
            None => &[],
        };
        let edits = self.differ.diff(previous, &snapshot.plantings);
        self.delivered = Some(snapshot.clone());

        Some(GardenUpdate { snapshot, edits })
    }

    /// The last snapshot returned by [`GardenFeed::next`].
    pub fn delivered(&self) -> Option<&GardenSnapshot> {
        self.delivered.as_ref()
    }
}
