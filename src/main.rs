use dotenv::dotenv;
use garden_care::configuration::get_configuration;
use garden_care::startup::Application;
use garden_care::telemetry::init_subscriber;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_subscriber("info")?;

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "garden service listening");
    application.run_until_stopped().await?;
    Ok(())
}
