use crate::routes::common::garden_error_response;
use crate::startup::GardenState;
use actix_web::{HttpResponse, web};

pub async fn remove_planting(
    garden: web::Data<GardenState>,
    path: web::Path<(i64,)>,
) -> HttpResponse {
    let planting_id: i64 = path.into_inner().0;

    match garden.plantings.remove_planting(planting_id) {
        Ok(()) => {
            tracing::info!(planting_id, "removed planting from garden");
            HttpResponse::NoContent().finish()
        }
        Err(e) => {
            tracing::warn!(planting_id, error = %e, "failed to remove planting");
            garden_error_response(e)
        }
    }
}
