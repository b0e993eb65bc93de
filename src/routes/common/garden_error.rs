use crate::error::GardenError;
use actix_web::HttpResponse;

pub fn garden_error_response(error: GardenError) -> HttpResponse {
    let body = error.to_string();
    match error {
        GardenError::UnknownPlant(_) | GardenError::PlantingNotFound(_) => {
            HttpResponse::NotFound().body(body)
        }
        GardenError::AlreadyPlanted(_) => HttpResponse::Conflict().body(body),
    }
}
