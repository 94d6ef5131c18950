//! Message types for the TUI update loop.
//!
//! Messages represent user actions, async command results, and system
//! events.

use crate::listing::FetchCompletion;

/// Messages for the catalog TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move selection up one row.
    CursorUp,
    /// Move selection down one row.
    CursorDown,
    /// Move selection to the left column.
    CursorLeft,
    /// Move selection to the right column.
    CursorRight,
    /// Move selection up one screen.
    PageUp,
    /// Move selection down one screen.
    PageDown,
    /// Jump straight back to the top of the grid.
    ScrollToTop,
    /// Move selection to the last loaded entry.
    End,

    // Data loading
    /// Reload the catalog from page 1.
    RefreshRequested,
    /// Re-issue the last failed request.
    RetryRequested,
    /// A fetch command finished.
    FetchCompleted(FetchCompletion),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for selection and scrolling messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::CursorLeft
                | Self::CursorRight
                | Self::PageUp
                | Self::PageDown
                | Self::ScrollToTop
                | Self::End
        )
    }

    /// Returns true for messages that start or finish catalog fetches.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested | Self::RetryRequested | Self::FetchCompleted(_)
        )
    }
}
