//! Issuing fetch tickets against a catalog gateway.

use std::time::Instant;

use crate::catalog::CatalogGateway;
use crate::telemetry::{TelemetryEvent, TelemetrySink};

use super::state::{FetchCompletion, FetchOutcome, FetchTicket};

/// Runs the request described by `ticket` and packages the result.
///
/// Failures are logged and recorded as telemetry here; they still come back
/// as a [`FetchCompletion`] so the reducer can clear its in-flight flags.
pub async fn fetch_page<G>(
    gateway: &G,
    ticket: FetchTicket,
    sink: &dyn TelemetrySink,
) -> FetchCompletion
where
    G: CatalogGateway + ?Sized,
{
    let start = Instant::now();
    let result = gateway.fetch_page(ticket.request()).await;
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let page = ticket.page().value();

    match &result {
        Ok(beers) => {
            tracing::debug!(
                page,
                intent = ticket.intent().label(),
                seq = ticket.seq().value(),
                item_count = beers.len(),
                latency_ms,
                "catalog page loaded"
            );
            sink.record(TelemetryEvent::PageFetched {
                page,
                item_count: beers.len(),
                latency_ms,
            });
        }
        Err(error) => {
            tracing::warn!(
                page,
                intent = ticket.intent().label(),
                seq = ticket.seq().value(),
                error_kind = error.kind(),
                %error,
                "catalog page fetch failed"
            );
            sink.record(TelemetryEvent::PageFetchFailed {
                page,
                error_kind: error.kind().to_owned(),
                status: error.status(),
            });
        }
    }

    FetchCompletion { ticket, result }
}

/// Logs reducer outcomes that are not visible in the list itself.
pub fn report_outcome(outcome: &FetchOutcome, sink: &dyn TelemetrySink) {
    if let FetchOutcome::Stale { ticket } = outcome {
        tracing::debug!(
            page = ticket.page().value(),
            intent = ticket.intent().label(),
            seq = ticket.seq().value(),
            "discarding superseded catalog response"
        );
        sink.record(TelemetryEvent::StaleResponseDiscarded {
            page: ticket.page().value(),
            seq: ticket.seq().value(),
        });
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::function;
    use rstest::rstest;

    use super::{fetch_page, report_outcome};
    use crate::catalog::models::test_support::page_of;
    use crate::catalog::{CatalogError, MockCatalogGateway, PageRequest};
    use crate::listing::{FetchOutcome, ListState};
    use crate::telemetry::TelemetryEvent;
    use crate::telemetry::test_support::RecordingTelemetrySink;

    #[rstest]
    #[tokio::test]
    async fn successful_fetch_records_latency_telemetry() {
        let mut gateway = MockCatalogGateway::new();
        gateway
            .expect_fetch_page()
            .with(function(|request: &PageRequest| request.page().is_first()))
            .times(1)
            .returning(|_| Ok(page_of(1, 10)));
        let sink = RecordingTelemetrySink::default();
        let (_state, ticket) = ListState::default().initialize();

        let completion = fetch_page(&gateway, ticket, &sink).await;

        assert_eq!(completion.ticket, ticket);
        assert_eq!(completion.result.map(|beers| beers.len()), Ok(10));
        let events = sink.take();
        assert!(matches!(
            events.as_slice(),
            [TelemetryEvent::PageFetched {
                page: 1,
                item_count: 10,
                ..
            }]
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn failed_fetch_records_error_kind_and_status() {
        let mut gateway = MockCatalogGateway::new();
        gateway.expect_fetch_page().times(1).returning(|_| {
            Err(CatalogError::Status {
                status: 502,
                message: "bad gateway".to_owned(),
            })
        });
        let sink = RecordingTelemetrySink::default();
        let (_state, ticket) = ListState::default().initialize();

        let completion = fetch_page(&gateway, ticket, &sink).await;

        assert!(completion.result.is_err());
        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::PageFetchFailed {
                page: 1,
                error_kind: "status".to_owned(),
                status: Some(502),
            }]
        );
    }

    #[rstest]
    fn stale_outcome_is_recorded() {
        let sink = RecordingTelemetrySink::default();
        let (_state, ticket) = ListState::default().initialize();

        report_outcome(&FetchOutcome::Stale { ticket }, &sink);
        report_outcome(&FetchOutcome::Appended { count: 3 }, &sink);

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::StaleResponseDiscarded {
                page: 1,
                seq: ticket.seq().value(),
            }]
        );
    }
}
