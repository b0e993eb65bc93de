use super::PlantCatalogEntry;
use crate::reveal::RevealConfig;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDetail {
    pub plant: PlantCatalogEntry,
    pub is_planted: bool,
    pub reveal: RevealConfig,
}
