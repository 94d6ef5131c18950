//! Reusable UI components for the catalog TUI.
//!
//! Components render state passed in through a view context and own no
//! application state of their own.

pub mod beer_grid;
pub(crate) mod text_truncate;

pub use beer_grid::{BeerGridComponent, BeerGridViewContext};
