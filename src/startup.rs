use crate::aggregator::GardenAggregator;
use crate::clock::{Clock, SystemClock};
use crate::configuration::Settings;
use crate::reveal::RevealConfig;
use crate::routes::{
    add_planting, garden_overview, health_check, list_plants, plant_detail, remove_planting,
    water_planting,
};
use crate::sources::{
    MemoryCatalog, MemoryPlantingStore, PlantCatalogSource, PlantingRecordSource,
};
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let catalog = MemoryCatalog::from_json_file(&configuration.garden.catalog_path)
            .with_context(|| {
                format!(
                    "Failed to load plant catalog from {}",
                    configuration.garden.catalog_path.display()
                )
            })?;
        let garden = GardenState::in_memory(
            catalog,
            Arc::new(SystemClock),
            configuration.garden.refresh_interval(),
        );

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let reveal = RevealConfig::from_settings(&configuration.reveal);
        let server = run(listener, garden, reveal, configuration.application.base_url)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Everything the handlers share: the two sources and the live aggregation over them.
pub struct GardenState {
    pub catalog: Arc<dyn PlantCatalogSource>,
    pub plantings: Arc<dyn PlantingRecordSource>,
    pub aggregator: GardenAggregator,
}

impl GardenState {
    /// Must be called from within a tokio runtime.
    pub fn new(
        catalog: Arc<dyn PlantCatalogSource>,
        plantings: Arc<dyn PlantingRecordSource>,
        clock: Arc<dyn Clock>,
        refresh: Option<Duration>,
    ) -> Self {
        let aggregator = GardenAggregator::spawn(catalog.as_ref(), plantings.as_ref(), clock, refresh);
        Self {
            catalog,
            plantings,
            aggregator,
        }
    }

    /// Garden backed by an in-memory planting store over `catalog`.
    pub fn in_memory(
        catalog: MemoryCatalog,
        clock: Arc<dyn Clock>,
        refresh: Option<Duration>,
    ) -> Self {
        let plantings = MemoryPlantingStore::new(catalog.subscribe(), clock.clone());
        Self::new(Arc::new(catalog), Arc::new(plantings), clock, refresh)
    }
}

pub struct ApplicationBaseUrl(pub String);

/// Route table, shared by the server and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/plants", web::get().to(list_plants))
        .route("/plants/{plant_id}", web::get().to(plant_detail))
        .service(
            web::scope("/garden")
                .route("", web::get().to(garden_overview))
                .route("/plantings", web::post().to(add_planting))
                .route(
                    "/plantings/{planting_id}/water",
                    web::post().to(water_planting),
                )
                .route(
                    "/plantings/{planting_id}",
                    web::delete().to(remove_planting),
                ),
        );
}

fn run(
    listener: TcpListener,
    garden: GardenState,
    reveal: RevealConfig,
    base_url: String,
) -> Result<Server, anyhow::Error> {
    let garden = Data::new(garden);
    let reveal = Data::new(reveal);
    let base_url = Data::new(ApplicationBaseUrl(base_url));
    let server = HttpServer::new(move || {
        App::new()
            .configure(routes)
            .app_data(garden.clone())
            .app_data(reveal.clone())
            .app_data(base_url.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
