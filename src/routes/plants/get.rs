use crate::domain::PlantDetail;
use crate::reveal::RevealConfig;
use crate::startup::GardenState;
use actix_web::{HttpResponse, web};

pub async fn list_plants(garden: web::Data<GardenState>) -> HttpResponse {
    let plants = garden.catalog.subscribe().borrow().to_vec();

    HttpResponse::Ok().json(plants)
}

pub async fn plant_detail(
    garden: web::Data<GardenState>,
    reveal: web::Data<RevealConfig>,
    path: web::Path<(String,)>,
) -> HttpResponse {
    let plant_id: String = path.into_inner().0;
    let plant = match garden.catalog.get(&plant_id) {
        Some(plant) => plant,
        None => {
            return HttpResponse::NotFound()
                .body(format!("plant `{}` is not in the catalog", plant_id));
        }
    };

    HttpResponse::Ok().json(PlantDetail {
        is_planted: garden.plantings.is_planted(&plant.id),
        plant,
        reveal: **reveal,
    })
}
