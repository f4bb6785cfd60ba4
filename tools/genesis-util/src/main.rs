//! generate-init-patch: genesis init validator patch generator

use std::process::ExitCode;

use clap::Parser;
use genesis_telemetry::{init_telemetry, TelemetryConfig};

use genesis_util::{run, Args};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging (stderr only)
    let mut telemetry = TelemetryConfig::from_env().with_service_name("generate-init-patch");
    if let Some(level) = &args.log_level {
        telemetry = telemetry.with_log_level(level.as_str());
    }
    if let Err(e) = init_telemetry(&telemetry) {
        eprintln!("Warning: {}", e);
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
