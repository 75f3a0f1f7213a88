use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub airly: AirlySettings,
    #[serde(default)]
    pub geolocation: GeolocationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AirlySettings {
    /// API key sent as the `apikey` header on every request.
    pub token: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeolocationSettings {
    #[serde(default = "default_geoip_endpoint")]
    pub endpoint: String,
}

impl Default for GeolocationSettings {
    fn default() -> Self {
        Self {
            endpoint: default_geoip_endpoint(),
        }
    }
}

fn default_base_url() -> String {
    "https://airapi.airly.eu".to_string()
}

fn default_geoip_endpoint() -> String {
    "http://ip-api.com/json".to_string()
}

pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/airq"))
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    if app_config.airly.token.trim().is_empty() {
        anyhow::bail!("airly.token must be set in config/airq.toml");
    }
    Ok(app_config)
}
