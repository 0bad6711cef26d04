//! Startup gate for a service: load the configuration, refuse to start on any violation.
//!
//! Reads `./config.{json,yml,yaml,toml}` if present and `APP_*` environment
//! variables, e.g.:
//!
//! ```text
//! APP_DATABASES__SESSION__DATABASE=20 APP_DATABASES__SESSION__TLS=true \
//! APP_DATABASES__SESSION__CERTIFICATE= cargo run --example startup
//! ```

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vetted_config::prelude::*;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match Configuration::load_default() {
        Ok(config) => {
            tracing::info!(
                endpoint = ?config.socket_address(),
                tls = config.security.tls,
                "configuration accepted"
            );
            ExitCode::SUCCESS
        }
        Err(ConfigError::ValidationError(err)) => {
            eprintln!("Error while validating the configuration:");
            for violation in err.violations() {
                eprintln!("  {}", violation);
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error while loading the configuration: {}", err);
            ExitCode::FAILURE
        }
    }
}
