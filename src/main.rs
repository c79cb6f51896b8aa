use std::process::ExitCode;

use ticket_intelligence::config::AppConfig;
use ticket_intelligence::{server, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = telemetry::init_tracing(&config.server) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match server::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application_failed");
            ExitCode::FAILURE
        }
    }
}
