//! Taplist library crate for browsing a paginated beer catalogue.
//!
//! The library fetches pages of beers over HTTP, folds them into an
//! append-only list through a pure reducer that discards superseded
//! responses, and renders the result as a two-column terminal grid with
//! pull-to-refresh and infinite scrolling.

pub mod catalog;
pub mod config;
pub mod listing;
pub mod logging;
pub mod telemetry;
pub mod tui;

pub use catalog::{Beer, CatalogError, CatalogGateway, HttpCatalogGateway};
pub use config::{OperationMode, TaplistConfig};
pub use listing::{FetchOutcome, ListState, PaginatedListController};
