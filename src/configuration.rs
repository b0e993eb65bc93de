use anyhow::Context;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub garden: GardenSettings,
    #[serde(default)]
    pub reveal: RevealSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub base_url: String,
}

#[derive(Deserialize, Clone)]
pub struct GardenSettings {
    /// JSON array of catalog entries loaded at startup.
    pub catalog_path: PathBuf,

    /// Re-aggregate on this period (seconds) so day counts roll over.
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,
}

impl GardenSettings {
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Detail-view header reveal. Lengths are in dp and scaled by `density`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RevealSettings {
    pub transition_offset_dp: f32,
    pub density: f32,
    pub app_bar_height_dp: f32,
    pub spring_stiffness: f32,
    pub spring_damping_ratio: f32,
    pub anchor_min_px: f32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            transition_offset_dp: 190.0,
            density: 1.0,
            app_bar_height_dp: 278.0,
            spring_stiffness: 200.0,
            spring_damping_ratio: 1.0,
            anchor_min_px: 1.0,
        }
    }
}

pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize configuration")
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
