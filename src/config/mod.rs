//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.taplist.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TAPLIST_BASE_URL`, `TAPLIST_PER_PAGE`, …
//! 4. **Command-line arguments** – `--base-url`/`-u`, `--per-page`/`-p`, …
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "https://api.punkapi.com/v2/beers"
//! per_page = 10
//! load_more_threshold_percent = 50
//! request_timeout_seconds = 20
//! show_fetch_errors = false
//! log_file = "taplist.log"
//! log_filter = "taplist=debug"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::error::CatalogError;
use crate::catalog::gateway::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::catalog::pagination::{DEFAULT_PER_PAGE, PerPage};

/// Default near-end threshold, as a percentage of the visible grid height.
pub const DEFAULT_LOAD_MORE_THRESHOLD_PERCENT: u8 = 50;

/// Default `tracing` filter directive when logging to a file.
pub const DEFAULT_LOG_FILTER: &str = "taplist=info";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Full-screen two-column catalog browser.
    Interactive,
    /// Load a fixed number of pages and print a summary to stdout.
    Print {
        /// Maximum number of pages to load.
        pages: u32,
    },
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use taplist::TaplistConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = TaplistConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// let per_page = config.per_page().expect("valid page size");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TAPLIST",
    discovery(
        dotfile_name = ".taplist.toml",
        config_file_name = "taplist.toml",
        app_name = "taplist"
    )
)]
pub struct TaplistConfig {
    /// Catalog endpoint returning a JSON array of beers.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-u <URL>`
    /// - Environment: `TAPLIST_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub base_url: Option<String>,

    /// Items requested per page (1 to 80).
    ///
    /// Can be provided via:
    /// - CLI: `--per-page <N>` or `-p <N>`
    /// - Environment: `TAPLIST_PER_PAGE`
    /// - Config file: `per_page = 10`
    #[ortho_config(cli_short = 'p')]
    pub per_page: u8,

    /// How close to the end of the grid, as a percentage of the visible
    /// height, scrolling must get before the next page is requested.
    #[ortho_config()]
    pub load_more_threshold_percent: u8,

    /// HTTP timeout for a single page request, in seconds.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Shows fetch errors and a retry hint in the status bar.
    ///
    /// Errors are only logged by default.
    ///
    /// Note: Environment variable `TAPLIST_SHOW_FETCH_ERRORS` is not supported
    /// because `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'e')]
    pub show_fetch_errors: bool,

    /// Loads this many pages without a terminal UI and prints a summary.
    ///
    /// Can be provided via:
    /// - CLI: `--print-pages <N>` or `-n <N>`
    /// - Environment: `TAPLIST_PRINT_PAGES`
    #[ortho_config(cli_short = 'n')]
    pub print_pages: Option<u32>,

    /// File receiving `tracing` output. Logging is disabled when unset.
    #[ortho_config()]
    pub log_file: Option<String>,

    /// `tracing` filter directive, for example `taplist=debug`.
    #[ortho_config()]
    pub log_filter: Option<String>,

    /// Emits telemetry events (to stderr in print mode, to the log file in
    /// interactive mode).
    #[ortho_config()]
    pub telemetry: bool,
}

impl Default for TaplistConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            per_page: DEFAULT_PER_PAGE,
            load_more_threshold_percent: DEFAULT_LOAD_MORE_THRESHOLD_PERCENT,
            request_timeout_seconds: DEFAULT_TIMEOUT_SECS,
            show_fetch_errors: false,
            print_pages: None,
            log_file: None,
            log_filter: None,
            telemetry: false,
        }
    }
}

impl TaplistConfig {
    /// Returns the configured catalog URL or the public default.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Returns the validated page size.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] when `per_page` is out of
    /// range.
    pub fn per_page(&self) -> Result<PerPage, CatalogError> {
        PerPage::new(self.per_page).map_err(|error| CatalogError::Configuration {
            message: error.to_string(),
        })
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns the configured log filter or [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `Print` when `print_pages` is set, otherwise `Interactive`.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        match self.print_pages {
            Some(pages) => OperationMode::Print { pages },
            None => OperationMode::Interactive,
        }
    }

    /// Checks that numeric settings are within their accepted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] describing the first invalid
    /// setting.
    pub fn validate(&self) -> Result<(), CatalogError> {
        self.per_page()?;

        if !(1..=100).contains(&self.load_more_threshold_percent) {
            return Err(configuration_error(format!(
                "load_more_threshold_percent must be between 1 and 100, got {}",
                self.load_more_threshold_percent
            )));
        }

        if self.request_timeout_seconds == 0 {
            return Err(configuration_error(
                "request_timeout_seconds must be greater than zero".to_owned(),
            ));
        }

        if self.print_pages == Some(0) {
            return Err(configuration_error(
                "print_pages must be at least 1 (use --print-pages or -n)".to_owned(),
            ));
        }

        Ok(())
    }
}

const fn configuration_error(message: String) -> CatalogError {
    CatalogError::Configuration { message }
}

#[cfg(test)]
mod tests;
