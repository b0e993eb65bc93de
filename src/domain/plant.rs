use serde::{Deserialize, Serialize};

/// Catalog metadata for one plant species. Owned by the catalog source and
/// never edited by the garden.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantCatalogEntry {
    /// Stable catalog key (example: `"malus-pumila"`)
    #[serde(rename = "plantId")]
    pub id: String,
    pub name: String,
    pub description: String,

    /// USDA hardiness zone the species grows best in.
    #[serde(default)]
    pub grow_zone_number: i32,

    /// Nominal days between waterings. Must be positive for the entry to be usable.
    #[serde(rename = "wateringInterval")]
    pub watering_interval_days: i64,

    #[serde(default)]
    pub image_url: String,
}
