//! TUI mode for browsing the catalog.
//!
//! This module provides the entry point for the interactive terminal user
//! interface. The gateway and view settings are handed to the TUI through
//! module-level storage before the program starts.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use taplist::TaplistConfig;
use taplist::catalog::{CatalogError, HttpCatalogGateway};
use taplist::telemetry::{NoopTelemetrySink, TelemetrySink, TracingTelemetrySink};
use taplist::tui::{
    CatalogApp, ViewSettings, set_catalog_gateway, set_telemetry_sink, set_view_settings,
};

/// Runs the TUI mode for browsing the catalog.
///
/// # Errors
///
/// Returns an error if:
/// - The base URL or page size is invalid
/// - The HTTP client cannot be built
/// - The TUI fails to initialise
pub async fn run(config: &TaplistConfig) -> Result<(), CatalogError> {
    let gateway = HttpCatalogGateway::new(config.base_url(), config.request_timeout())?;
    let settings = view_settings(config)?;

    // Storage is write-once; re-running in the same process keeps the
    // existing context.
    let _ = set_catalog_gateway(Arc::new(gateway));
    let _ = set_view_settings(settings);
    let _ = set_telemetry_sink(telemetry_sink(config.telemetry));

    tracing::info!(
        base_url = config.base_url(),
        per_page = settings.per_page.value(),
        "starting catalog browser"
    );

    run_tui().await.map_err(|error| CatalogError::Io {
        message: format!("TUI error: {error}"),
    })?;

    tracing::info!("catalog browser closed");
    Ok(())
}

/// Builds the view settings from configuration.
fn view_settings(config: &TaplistConfig) -> Result<ViewSettings, CatalogError> {
    Ok(ViewSettings {
        per_page: config.per_page()?,
        load_more_threshold_percent: config.load_more_threshold_percent,
        show_fetch_errors: config.show_fetch_errors,
    })
}

/// Interactive telemetry goes through `tracing` because the terminal owns
/// stdout and stderr.
fn telemetry_sink(enabled: bool) -> Arc<dyn TelemetrySink> {
    if enabled {
        Arc::new(TracingTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    }
}

/// Runs the bubbletea-rs program with the `CatalogApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // CatalogApp::init() will retrieve its context from module-level storage.
    let program = Program::<CatalogApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
