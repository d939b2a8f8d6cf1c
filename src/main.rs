use gateway_admission::{config::AdmissionConfig, run};
use tracing::{error, info};

fn main() {
    let config_path = std::env::var("GATEWAY_ADMISSION_CONFIG")
        .unwrap_or_else(|_| "config/admission.example.toml".to_string());
    let config = AdmissionConfig::load(&config_path)
        .unwrap_or_else(|err| panic!("failed to load config: {err}"));

    let violations = run(&config).unwrap_or_else(|err| panic!("validation did not run: {err}"));
    if violations.is_empty() {
        info!("route document accepted");
        return;
    }

    for violation in &violations {
        error!(violation = %violation, "route document rejected");
    }
    std::process::exit(1);
}
