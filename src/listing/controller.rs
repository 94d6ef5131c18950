//! Sequential driver for the list reducer.

use std::mem;

use crate::catalog::{CatalogGateway, PerPage};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::fetch::{fetch_page, report_outcome};
use super::state::{FetchOutcome, FetchTicket, ListState};

/// Owns a [`ListState`] and runs each issued request to completion before
/// returning.
///
/// Because every call awaits its own request, responses can never overlap;
/// the reducer's sequencing still applies and shows up when callers mix
/// this driver with manual [`ListState`] transitions.
pub struct PaginatedListController<'client, Gateway>
where
    Gateway: CatalogGateway + ?Sized,
{
    client: &'client Gateway,
    sink: &'client dyn TelemetrySink,
    state: ListState,
}

impl<'client, Gateway> PaginatedListController<'client, Gateway>
where
    Gateway: CatalogGateway + ?Sized,
{
    /// Create a controller with mount-time state and no telemetry.
    #[must_use]
    pub const fn new(client: &'client Gateway, per_page: PerPage) -> Self {
        Self {
            client,
            sink: &NoopTelemetrySink,
            state: ListState::new(per_page),
        }
    }

    /// Record fetch telemetry to `sink`.
    #[must_use]
    pub const fn with_telemetry(mut self, sink: &'client dyn TelemetrySink) -> Self {
        self.sink = sink;
        self
    }

    /// Current list state.
    #[must_use]
    pub const fn state(&self) -> &ListState {
        &self.state
    }

    /// Consumes the controller, returning the final list state.
    #[must_use]
    pub fn into_state(self) -> ListState {
        self.state
    }

    /// Loads page 1 for the first time.
    pub async fn initialize(&mut self) -> FetchOutcome {
        let (state, ticket) = self.take_state().initialize();
        self.state = state;
        self.run(ticket).await
    }

    /// Reloads from page 1. Returns `None` when the reducer ignored the
    /// request.
    pub async fn refresh(&mut self) -> Option<FetchOutcome> {
        let (state, ticket) = self.take_state().refresh();
        self.state = state;
        self.run_issued(ticket).await
    }

    /// Loads the next page. Returns `None` when no request was issued.
    pub async fn load_more(&mut self) -> Option<FetchOutcome> {
        let (state, ticket) = self.take_state().load_more();
        self.state = state;
        self.run_issued(ticket).await
    }

    /// Re-issues the last failed request, if any.
    pub async fn retry(&mut self) -> Option<FetchOutcome> {
        let (state, ticket) = self.take_state().retry();
        self.state = state;
        self.run_issued(ticket).await
    }

    async fn run_issued(&mut self, ticket: Option<FetchTicket>) -> Option<FetchOutcome> {
        let issued = ticket?;
        Some(self.run(issued).await)
    }

    async fn run(&mut self, ticket: FetchTicket) -> FetchOutcome {
        let completion = fetch_page(self.client, ticket, self.sink).await;
        let (state, outcome) = self.take_state().apply(completion);
        self.state = state;
        report_outcome(&outcome, self.sink);
        outcome
    }

    fn take_state(&mut self) -> ListState {
        mem::take(&mut self.state)
    }
}
