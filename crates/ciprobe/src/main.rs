//! ciprobe — Fibonacci, primes and CI environment report.

use std::process::ExitCode;

use ciprobe_core::exit_codes;
use ciprobe_lib::logging::{self, LogConfig};
use ciprobe_lib::{app, config, errors, version};

fn main() -> ExitCode {
    // Parse CLI args; usage errors print clap's message and exit here
    let config = config::AppConfig::parse();

    // Initialize tracing
    logging::init(&LogConfig::from_name(&config.log_level.to_string_lossy()));
    tracing::debug!(version = %version::full_version(), "starting");

    let code = match app::catch_faults(|| app::run(&config, std::io::stdout().lock())) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            match &err {
                errors::AppError::UnknownTask => tracing::error!("Unknown task."),
                other => tracing::error!(error = ?other, "Unhandled error: {other}"),
            }
            errors::exit_code(&err)
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
