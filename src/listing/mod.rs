//! Paginated list state and the controller that drives it.
//!
//! The list is modelled as a pure reducer over [`ListState`]: every user
//! event (mount, refresh, scroll near the end, retry) consumes the current
//! state and returns the next one together with an optional [`FetchTicket`]
//! naming the request to issue. Completed requests come back as a
//! [`FetchCompletion`] and are folded in with [`ListState::apply`], which
//! reports a typed [`FetchOutcome`].
//!
//! Each ticket carries a monotonically increasing [`RequestSeq`]. A refresh
//! supersedes every request issued before it and at most one load-more is
//! pending at a time, so a completion that is no longer the latest for its
//! intent is reported as [`FetchOutcome::Stale`] and leaves the state
//! untouched.
//!
//! [`fetch_page`] performs the network call for a ticket and
//! [`PaginatedListController`] strings the two together for callers that
//! drive the list sequentially (print mode and integration tests). The
//! terminal UI drives the reducer directly from its update loop.

mod controller;
mod fetch;
mod state;

pub use controller::PaginatedListController;
pub use fetch::{fetch_page, report_outcome};
pub use state::{
    FetchCompletion, FetchFailure, FetchIntent, FetchOutcome, FetchTicket, ListState, RequestSeq,
};
