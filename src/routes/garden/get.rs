use crate::startup::GardenState;
use actix_web::{HttpResponse, web};

/// Latest aggregated garden, including what had to be left out.
pub async fn garden_overview(garden: web::Data<GardenState>) -> HttpResponse {
    let snapshot = garden.aggregator.snapshot();

    HttpResponse::Ok().json(snapshot.to_view())
}
