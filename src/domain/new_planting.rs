use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlanting {
    /// Catalog key of the plant to add to the garden.
    pub plant_id: String,
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPlanting {
    pub planting_id: i64,
}
