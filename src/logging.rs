//! `tracing` subscriber setup.
//!
//! The terminal UI owns stdout, so log output only goes to a file named in
//! configuration. Without one no subscriber is installed and `tracing`
//! macros compile down to cheap no-ops.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::catalog::CatalogError;

/// Parses a `tracing` filter directive such as `taplist=debug`.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when the directive is invalid.
pub fn parse_filter(directive: &str) -> Result<EnvFilter, CatalogError> {
    EnvFilter::try_new(directive).map_err(|error| CatalogError::Configuration {
        message: format!("invalid log filter {directive:?}: {error}"),
    })
}

/// Opens `path` for appending, creating it when missing.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be opened.
pub fn open_log_file(path: &str) -> Result<File, CatalogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| CatalogError::Io {
            message: format!("failed to open log file {path}: {error}"),
        })
}

/// Installs the global subscriber writing plain-text events to `path`.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] for an invalid filter or when a
/// global subscriber is already installed, and [`CatalogError::Io`] when the
/// file cannot be opened.
pub fn init_file_logging(path: &str, directive: &str) -> Result<(), CatalogError> {
    let filter = parse_filter(directive)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|error| CatalogError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })
}
