//! Application telemetry events and sinks.
//!
//! Taplist records a handful of operational signals about catalog fetches:
//! latency of successful pages, failures by error kind, and responses that
//! were discarded because a newer request superseded them. Events are never
//! transmitted anywhere; sinks either drop them, write JSON lines to stderr,
//! or forward them to `tracing`.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Taplist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A catalog page loaded successfully.
    PageFetched {
        /// Requested page number.
        page: u32,
        /// Number of items in the response.
        item_count: usize,
        /// Wall-clock request latency in milliseconds.
        latency_ms: u64,
    },
    /// A catalog page request failed.
    PageFetchFailed {
        /// Requested page number.
        page: u32,
        /// Short error label (see `CatalogError::kind`).
        error_kind: String,
        /// HTTP status when the API answered with a non-200 response.
        status: Option<u16>,
    },
    /// A completed request was ignored because a newer one superseded it.
    StaleResponseDiscarded {
        /// Page the stale request asked for.
        page: u32,
        /// Sequence number of the stale request.
        seq: u64,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Used by print mode, where stdout carries the catalog summary.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Forwards telemetry events to `tracing` under the `taplist::telemetry`
/// target.
///
/// The terminal UI owns stdout and stderr, so interactive sessions route
/// telemetry through the log file instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };
        tracing::info!(target: "taplist::telemetry", event = %serialised);
    }
}

/// Test doubles for telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Removes and returns all recorded events.
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::PageFetched {
            page: 2,
            item_count: 10,
            latency_ms: 35,
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::PageFetched {
                page: 2,
                item_count: 10,
                latency_ms: 35,
            }]
        );
        assert!(sink.take().is_empty(), "take should drain the buffer");
    }

    #[test]
    fn events_serialise_with_snake_case_type_tag() {
        let event = TelemetryEvent::StaleResponseDiscarded { page: 3, seq: 7 };

        let serialised = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            serialised,
            serde_json::json!({"type": "stale_response_discarded", "page": 3, "seq": 7})
        );
    }
}
