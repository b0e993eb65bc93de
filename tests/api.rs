use actix_web::http::{StatusCode, header};
use actix_web::web::Data;
use actix_web::{App, test};
use chrono::{TimeZone, Utc};
use garden_care::aggregator::{GardenFeed, GardenSnapshot};
use garden_care::clock::{Clock, FixedClock};
use garden_care::configuration::RevealSettings;
use garden_care::domain::{NewPlanting, PlantCatalogEntry};
use garden_care::reveal::RevealConfig;
use garden_care::sources::MemoryCatalog;
use garden_care::startup::{ApplicationBaseUrl, GardenState, routes};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

const CATALOG: &str = r#"[
  {"plantId": "beta-vulgaris", "name": "Beet", "description": "A root.", "growZoneNumber": 2, "wateringInterval": 7, "imageUrl": "https://img.example/beet.jpg"},
  {"plantId": "coriandrum-sativum", "name": "Cilantro", "description": "A herb.", "growZoneNumber": 2, "wateringInterval": 2, "imageUrl": "https://img.example/cilantro.jpg"}
]"#;

struct TestGarden {
    state: Data<GardenState>,
    reveal: Data<RevealConfig>,
    base_url: Data<ApplicationBaseUrl>,
    clock: Arc<FixedClock>,
}

fn test_garden() -> TestGarden {
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let catalog = MemoryCatalog::from_json_str(CATALOG).unwrap();
    TestGarden {
        state: Data::new(GardenState::in_memory(catalog, clock.clone(), None)),
        reveal: Data::new(RevealConfig::from_settings(&RevealSettings {
            density: 2.0,
            ..RevealSettings::default()
        })),
        base_url: Data::new(ApplicationBaseUrl("http://garden.test".into())),
        clock,
    }
}

macro_rules! app {
    ($garden:expr) => {
        test::init_service(
            App::new()
                .configure(routes)
                .app_data($garden.state.clone())
                .app_data($garden.reveal.clone())
                .app_data($garden.base_url.clone()),
        )
        .await
    };
}

/// Follow `feed` until a snapshot satisfies `accept`.
async fn next_matching(
    feed: &mut GardenFeed,
    accept: impl Fn(&GardenSnapshot) -> bool,
) -> GardenSnapshot {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            let update = feed.next().await.expect("aggregator stopped");
            if accept(&update.snapshot) {
                return update.snapshot;
            }
        }
    })
    .await
    .expect("garden never reached the expected state")
}

fn plant_request(plant_id: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/garden/plantings")
        .set_json(NewPlanting {
            plant_id: plant_id.into(),
        })
}

#[actix_web::test]
async fn health_check_works() {
    let garden = test_garden();
    let app = app!(garden);

    let response = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn lists_the_catalog() {
    let garden = test_garden();
    let app = app!(garden);

    let plants: Vec<PlantCatalogEntry> =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/plants").to_request())
            .await;
    let names: Vec<&str> = plants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Beet", "Cilantro"]);
}

#[actix_web::test]
async fn plant_detail_reports_whether_it_is_planted() {
    let garden = test_garden();
    let app = app!(garden);

    let detail: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/plants/beta-vulgaris").to_request(),
    )
    .await;
    assert_eq!(detail["isPlanted"], false);
    assert_eq!(detail["plant"]["wateringInterval"], 7);
    assert_eq!(detail["reveal"]["transitionOffsetPx"], 380.0);
    assert_eq!(detail["reveal"]["appBarHeightPx"], 556.0);
    assert_eq!(detail["reveal"]["anchorMinPx"], 1.0);
    assert_eq!(detail["reveal"]["spring"]["stiffness"], 200.0);

    let response = test::call_service(&app, plant_request("beta-vulgaris").to_request()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let detail: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/plants/beta-vulgaris").to_request(),
    )
    .await;
    assert_eq!(detail["isPlanted"], true);

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/plants/triffid").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn adding_a_planting_returns_its_location() {
    let garden = test_garden();
    let app = app!(garden);

    let response = test::call_service(&app, plant_request("coriandrum-sativum").to_request()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    let body: Value = test::read_body_json(response).await;
    let planting_id = body["plantingId"].as_i64().unwrap();
    assert_eq!(
        location,
        format!("http://garden.test/garden/plantings/{planting_id}")
    );

    let again = test::call_service(&app, plant_request("coriandrum-sativum").to_request()).await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let unknown = test::call_service(&app, plant_request("triffid").to_request()).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn garden_overview_carries_care_state() {
    let garden = test_garden();
    let app = app!(garden);
    let mut feed = garden.state.aggregator.feed();

    for plant_id in ["beta-vulgaris", "coriandrum-sativum"] {
        let response = test::call_service(&app, plant_request(plant_id).to_request()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let planted = next_matching(&mut feed, |s| s.plantings.len() == 2).await;

    // Three days later only the beet gets watered.
    garden.clock.advance(chrono::Duration::days(3));
    let beet_id = planted.plantings[0].planting_id();
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/garden/plantings/{beet_id}/water"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let now = garden.clock.now();
    let watered = next_matching(&mut feed, |s| {
        s.plantings[0].planting.last_watered_date == Some(now)
    })
    .await;

    let overview: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/garden").to_request())
            .await;
    assert_eq!(overview["version"], watered.version);
    assert_eq!(overview["skipped"], 0);
    let plantings = overview["plantings"].as_array().unwrap();
    assert_eq!(plantings.len(), 2);
    assert_eq!(plantings[0]["plant"]["name"], "Beet");
    assert_eq!(plantings[0]["care"]["daysSinceLastWatered"], 0);
    assert_eq!(plantings[0]["care"]["wateringStatus"], "UP_TO_DATE");
    assert_eq!(plantings[1]["plant"]["name"], "Cilantro");
    assert_eq!(plantings[1]["care"]["daysSincePlanted"], 3);
    assert_eq!(plantings[1]["care"]["wateringStatus"], "OVERDUE");
}

#[actix_web::test]
async fn removing_and_watering_missing_plantings_is_not_found() {
    let garden = test_garden();
    let app = app!(garden);

    let response = test::call_service(&app, plant_request("beta-vulgaris").to_request()).await;
    let body: Value = test::read_body_json(response).await;
    let planting_id = body["plantingId"].as_i64().unwrap();
    let path = format!("/garden/plantings/{planting_id}");

    let removed = test::call_service(&app, test::TestRequest::delete().uri(&path).to_request()).await;
    assert_eq!(removed.status(), StatusCode::NO_CONTENT);

    let again = test::call_service(&app, test::TestRequest::delete().uri(&path).to_request()).await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let water = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("{path}/water"))
            .to_request(),
    )
    .await;
    assert_eq!(water.status(), StatusCode::NOT_FOUND);
}
