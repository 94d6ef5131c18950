//! Fetch lifecycle handlers for the catalog application.
//!
//! Each handler runs one reducer transition and turns any issued ticket into
//! an async command. Completions come back as [`AppMsg::FetchCompleted`].

use std::any::Any;
use std::mem;

use bubbletea_rs::Cmd;

use crate::catalog::CatalogError;
use crate::listing::{FetchCompletion, FetchOutcome, FetchTicket, fetch_page, report_outcome};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::CatalogApp;
use crate::tui::components::beer_grid::row_count;
use crate::tui::messages::AppMsg;

impl CatalogApp {
    /// Issues the first load of page 1 and returns the fetch command.
    pub fn start(&mut self) -> Cmd {
        let (list, ticket) = mem::take(&mut self.list).initialize();
        self.list = list;
        self.fetch_cmd(ticket)
    }

    /// Handles a user refresh request.
    pub(super) fn handle_refresh_requested(&mut self) -> Option<Cmd> {
        let (list, ticket) = mem::take(&mut self.list).refresh();
        self.list = list;
        ticket.map(|issued| self.fetch_cmd(issued))
    }

    /// Re-issues the most recent failed request.
    pub(super) fn handle_retry_requested(&mut self) -> Option<Cmd> {
        let (list, ticket) = mem::take(&mut self.list).retry();
        self.list = list;
        ticket.map(|issued| self.fetch_cmd(issued))
    }

    /// Folds a finished fetch into the list.
    ///
    /// A replaced list returns the selection to the top. The viewport is then
    /// checked again so a first page shorter than the screen keeps loading.
    pub(super) fn handle_fetch_completed(&mut self, completion: FetchCompletion) -> Option<Cmd> {
        let (list, outcome) = mem::take(&mut self.list).apply(completion);
        self.list = list;
        let sink = self
            .fetch_context
            .as_ref()
            .map_or(&NoopTelemetrySink as &dyn TelemetrySink, |context| {
                context.sink.as_ref()
            });
        report_outcome(&outcome, sink);

        if matches!(outcome, FetchOutcome::Replaced { .. }) {
            self.cursor = 0;
            self.first_row = 0;
        }
        if !outcome.is_applied() {
            return None;
        }
        self.maybe_load_more()
    }

    /// Requests the next page once the end of the grid is near.
    pub(super) fn maybe_load_more(&mut self) -> Option<Cmd> {
        if !self.is_near_end() {
            return None;
        }
        let (list, ticket) = mem::take(&mut self.list).load_more();
        self.list = list;
        ticket.map(|issued| self.fetch_cmd(issued))
    }

    /// True when the rows below the viewport fall under the configured
    /// fraction of the viewport height.
    pub(super) fn is_near_end(&self) -> bool {
        let visible = self.visible_rows_from(self.first_row);
        let remaining = row_count(self.list.item_count())
            .saturating_sub(self.first_row.saturating_add(visible));
        let threshold = usize::from(self.settings.load_more_threshold_percent);
        remaining.saturating_mul(100) < visible.saturating_mul(threshold)
    }

    /// Builds the async command that runs `ticket` against the gateway.
    pub(super) fn fetch_cmd(&self, ticket: FetchTicket) -> Cmd {
        let context = self.fetch_context.clone();
        Box::pin(async move {
            let Some(ctx) = context else {
                let completion = FetchCompletion::failure(
                    ticket,
                    CatalogError::Configuration {
                        message: "catalog gateway not configured".to_owned(),
                    },
                );
                return Some(Box::new(AppMsg::FetchCompleted(completion)) as Box<dyn Any + Send>);
            };
            let completion = fetch_page(ctx.gateway.as_ref(), ticket, ctx.sink.as_ref()).await;
            Some(Box::new(AppMsg::FetchCompleted(completion)) as Box<dyn Any + Send>)
        })
    }
}
