pub mod config;
pub mod model;
pub mod service;

use config::AdmissionConfig;
use model::HttpRoute;
use service::{validate_route, NoParentRefValidation, ValidationError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Loads the configured route document and validates it. The returned list
/// is empty exactly when the document is acceptable.
pub fn run(config: &AdmissionConfig) -> Result<Vec<ValidationError>, Box<dyn std::error::Error>> {
    init_logging(&config.logging.level, config.logging.json);

    let route = load_route(&config.input.route_file)?;
    tracing::info!(
        file = %config.input.route_file,
        rules = route.spec.rules.len(),
        "validating route document"
    );

    Ok(validate_route(&route, &NoParentRefValidation))
}

/// Reads a route document from disk; `.json` files are parsed as JSON,
/// everything else as YAML.
pub fn load_route(path: &str) -> Result<HttpRoute, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let route = if path.ends_with(".json") {
        serde_json::from_str(&raw)?
    } else {
        serde_yaml::from_str(&raw)?
    };
    Ok(route)
}

pub fn init_logging(level: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let fmt_layer = if json {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
