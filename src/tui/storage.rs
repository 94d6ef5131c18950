//! Startup context storage for the catalog TUI.
//!
//! This module owns the global `OnceLock` values used during TUI bootstrapping
//! and provides the setter/getter functions consumed by CLI wiring and
//! `CatalogApp::init()`.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::catalog::CatalogGateway;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::app::ViewSettings;

/// Gateway used by fetch commands.
static CATALOG_GATEWAY: OnceLock<Arc<dyn CatalogGateway>> = OnceLock::new();

/// Rendering and paging preferences.
static VIEW_SETTINGS: OnceLock<ViewSettings> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Sets the catalog gateway used by the TUI.
///
/// This must be called before starting the bubbletea-rs program. Without a
/// gateway every fetch completes with a configuration error.
///
/// # Returns
///
/// `true` if the gateway was set, `false` if it was already set.
pub fn set_catalog_gateway(gateway: Arc<dyn CatalogGateway>) -> bool {
    CATALOG_GATEWAY.set(gateway).is_ok()
}

/// Sets the view settings for the TUI application.
///
/// # Returns
///
/// `true` if the settings were set, `false` if they were already set.
pub fn set_view_settings(settings: ViewSettings) -> bool {
    VIEW_SETTINGS.set(settings).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets the configured gateway, if any.
pub(crate) fn get_catalog_gateway() -> Option<Arc<dyn CatalogGateway>> {
    CATALOG_GATEWAY.get().cloned()
}

/// Gets the configured view settings or the defaults.
pub(crate) fn get_view_settings() -> ViewSettings {
    VIEW_SETTINGS.get().copied().unwrap_or_default()
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Fallback dimensions when the terminal cannot be queried.
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Queries the terminal for its initial dimensions.
///
/// Falls back to 80x24 when the query fails or reports an empty area.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    usable_size(terminal::size().ok())
}

fn usable_size(reported: Option<(u16, u16)>) -> (u16, u16) {
    reported
        .filter(|(width, height)| *width > 0 && *height > 0)
        .unwrap_or(DEFAULT_TERMINAL_SIZE)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DEFAULT_TERMINAL_SIZE, usable_size};

    #[rstest]
    #[case::reported(Some((120, 40)), (120, 40))]
    #[case::query_failed(None, DEFAULT_TERMINAL_SIZE)]
    #[case::zero_width(Some((0, 40)), DEFAULT_TERMINAL_SIZE)]
    #[case::zero_height(Some((120, 0)), DEFAULT_TERMINAL_SIZE)]
    fn initial_size_falls_back_to_default(
        #[case] reported: Option<(u16, u16)>,
        #[case] expected: (u16, u16),
    ) {
        assert_eq!(usable_size(reported), expected);
    }
}
