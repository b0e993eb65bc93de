use crate::domain::{CreatedPlanting, NewPlanting};
use crate::routes::common::garden_error_response;
use crate::startup::{ApplicationBaseUrl, GardenState};
use actix_web::http::header;
use actix_web::web::Json;
use actix_web::{HttpResponse, web};

pub async fn add_planting(
    garden: web::Data<GardenState>,
    base_url: web::Data<ApplicationBaseUrl>,
    new_planting: Json<NewPlanting>,
) -> HttpResponse {
    let planting_id = match garden.plantings.add_planting(&new_planting.plant_id) {
        Ok(planting_id) => planting_id,
        Err(e) => {
            tracing::warn!(plant_id = %new_planting.plant_id, error = %e, "failed to add planting");
            return garden_error_response(e);
        }
    };
    tracing::info!(planting_id, plant_id = %new_planting.plant_id, "added planting");

    HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("{}/garden/plantings/{}", base_url.0, planting_id),
        ))
        .json(CreatedPlanting { planting_id })
}
