//! Main TUI application model implementing the MVU pattern.
//!
//! `CatalogApp` owns the list reducer state, the grid selection and the
//! scroll window. Key presses and resizes become navigation messages;
//! navigation that brings the end of the grid into range emits a load-more
//! fetch, and completed fetches are folded back through the reducer.
//!
//! # Module Structure
//!
//! - `fetch_handlers`: Refresh, retry, load-more and fetch completion
//! - `navigation`: Selection movement and scroll window management
//! - `rendering`: View rendering methods for terminal output
//! - `model_impl`: `bubbletea_rs::Model` implementation

use std::sync::Arc;

use bubbletea_rs::Cmd;
use bubbletea_widgets::spinner;

use crate::catalog::{Beer, CatalogGateway, PerPage};
use crate::config::DEFAULT_LOAD_MORE_THRESHOLD_PERCENT;
use crate::listing::ListState;
use crate::telemetry::TelemetrySink;

use super::components::BeerGridComponent;
use super::components::beer_grid::CELL_HEIGHT;
use super::messages::AppMsg;

mod fetch_handlers;
mod model_impl;
mod navigation;
mod rendering;


/// Lines used by the header and status bars.
const CHROME_HEIGHT: usize = 2;

/// Lines reserved below the grid for the loading footer.
const FOOTER_HEIGHT: usize = 1;

/// Rendering and paging preferences taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    /// Items requested per page.
    pub per_page: PerPage,
    /// Near-end threshold as a percentage of the visible grid height.
    pub load_more_threshold_percent: u8,
    /// Whether fetch errors are shown in the status bar.
    pub show_fetch_errors: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            per_page: PerPage::default(),
            load_more_threshold_percent: DEFAULT_LOAD_MORE_THRESHOLD_PERCENT,
            show_fetch_errors: false,
        }
    }
}

/// Gateway and telemetry sink captured by fetch commands.
#[derive(Clone)]
pub(crate) struct FetchContext {
    pub(crate) gateway: Arc<dyn CatalogGateway>,
    pub(crate) sink: Arc<dyn TelemetrySink>,
}

/// Main application model for the catalog TUI.
pub struct CatalogApp {
    /// Pagination state and loaded entries.
    pub(crate) list: ListState,
    /// Index of the selected entry.
    pub(crate) cursor: usize,
    /// First grid row inside the viewport.
    pub(crate) first_row: usize,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    settings: ViewSettings,
    grid: BeerGridComponent,
    spinner: spinner::Model,
    fetch_context: Option<FetchContext>,
}

impl CatalogApp {
    /// Creates an application in the mount-time loading state.
    #[must_use]
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            list: ListState::new(settings.per_page),
            cursor: 0,
            first_row: 0,
            width: 80,
            height: 24,
            show_help: false,
            settings,
            grid: BeerGridComponent::new(),
            spinner: spinner::new(&[spinner::with_spinner(spinner::DOT.clone())]),
            fetch_context: None,
        }
    }

    /// Uses `gateway` for fetches and records telemetry to `sink`.
    #[must_use]
    pub fn with_fetch_context(
        mut self,
        gateway: Arc<dyn CatalogGateway>,
        sink: Arc<dyn TelemetrySink>,
    ) -> Self {
        self.fetch_context = Some(FetchContext { gateway, sink });
        self
    }

    /// Sets the terminal dimensions used for layout.
    #[must_use]
    pub const fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the list state.
    #[must_use]
    pub const fn list(&self) -> &ListState {
        &self.list
    }

    /// Returns the index of the selected entry.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Returns the first grid row inside the viewport.
    #[must_use]
    pub const fn first_visible_row(&self) -> usize {
        self.first_row
    }

    /// Returns the selected entry, if any.
    #[must_use]
    pub fn selected_beer(&self) -> Option<&Beer> {
        self.list.items().get(self.cursor)
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::CursorLeft => self.handle_cursor_left(),
            AppMsg::CursorRight => self.handle_cursor_right(),
            AppMsg::PageUp => self.handle_page_up(),
            AppMsg::PageDown => self.handle_page_down(),
            AppMsg::ScrollToTop => self.handle_scroll_to_top(),
            AppMsg::End => self.handle_end(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    /// Dispatches data loading messages to their handlers.
    fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.handle_refresh_requested(),
            AppMsg::RetryRequested => self.handle_retry_requested(),
            AppMsg::FetchCompleted(completion) => self.handle_fetch_completed(completion.clone()),
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.after_viewport_change()
    }

    /// Lines available between the header and status bars.
    pub(super) fn body_height(&self) -> usize {
        usize::from(self.height).saturating_sub(CHROME_HEIGHT)
    }

    /// Grid rows that fit when the viewport starts at `first_row`.
    ///
    /// The banner only occupies space while the top row is visible. At least
    /// one row is always reported so navigation keeps working in tiny
    /// terminals.
    pub(super) fn visible_rows_from(&self, first_row: usize) -> usize {
        let banner = if first_row == 0 {
            rendering::BANNER_HEIGHT
        } else {
            0
        };
        self.body_height()
            .saturating_sub(FOOTER_HEIGHT)
            .saturating_sub(banner)
            .checked_div(CELL_HEIGHT)
            .unwrap_or(0)
            .max(1)
    }
}
