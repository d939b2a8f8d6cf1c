use figment::{providers::Env, providers::Format, providers::Toml, Figment};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AdmissionConfig {
    pub logging: LoggingConfig,
    pub input: InputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    pub route_file: String,
}

impl AdmissionConfig {
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("GATEWAY_ADMISSION__").split("__"))
            .extract()
    }
}
