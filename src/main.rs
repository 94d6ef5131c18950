//! Taplist CLI entrypoint for browsing the beer catalogue.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use taplist::{CatalogError, OperationMode, TaplistConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let config = load_config()?;
    config.validate()?;

    if let Some(path) = config.log_file.as_deref() {
        taplist::logging::init_file_logging(path, config.log_filter())?;
    }

    match config.operation_mode() {
        OperationMode::Interactive => cli::catalog_tui::run(&config).await,
        OperationMode::Print { pages } => cli::print_pages::run(&config, pages).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TaplistConfig, CatalogError> {
    TaplistConfig::load().map_err(|error| CatalogError::Configuration {
        message: error.to_string(),
    })
}
