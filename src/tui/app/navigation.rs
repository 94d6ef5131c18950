//! Selection movement and scroll window management.
//!
//! Every movement clamps the cursor to the loaded entries, scrolls so the
//! selected row stays visible and then checks whether the end of the grid
//! has come close enough to load the next page.

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::tui::components::beer_grid::{COLUMNS, row_of};

impl CatalogApp {
    /// Adjusts the first visible row so the cursor row is on screen.
    pub(super) fn ensure_cursor_visible(&mut self) {
        let cursor_row = row_of(self.cursor);
        if cursor_row < self.first_row {
            self.first_row = cursor_row;
            return;
        }

        let viewport_end = self
            .first_row
            .saturating_add(self.visible_rows_from(self.first_row));
        if cursor_row >= viewport_end {
            // Rows below the top lose the banner, so size against that layout.
            let scrolled_rows = self.visible_rows_from(1);
            self.first_row = cursor_row
                .saturating_add(1)
                .saturating_sub(scrolled_rows)
                .max(1);
        }
    }

    /// Re-runs the scroll and near-end checks after the viewport changed.
    pub(super) fn after_viewport_change(&mut self) -> Option<Cmd> {
        self.clamp_cursor();
        self.ensure_cursor_visible();
        self.maybe_load_more()
    }

    fn clamp_cursor(&mut self) {
        let max_index = self.list.item_count().saturating_sub(1);
        self.cursor = self.cursor.min(max_index);
    }

    fn move_cursor_up(&mut self, step: usize) -> Option<Cmd> {
        self.cursor = self.cursor.saturating_sub(step);
        self.after_viewport_change()
    }

    fn move_cursor_down(&mut self, step: usize) -> Option<Cmd> {
        self.cursor = self.cursor.saturating_add(step);
        self.after_viewport_change()
    }

    fn page_step(&self) -> usize {
        self.visible_rows_from(self.first_row)
            .saturating_mul(COLUMNS)
    }

    /// Handles cursor up navigation.
    pub(super) fn handle_cursor_up(&mut self) -> Option<Cmd> {
        self.move_cursor_up(COLUMNS)
    }

    /// Handles cursor down navigation.
    pub(super) fn handle_cursor_down(&mut self) -> Option<Cmd> {
        self.move_cursor_down(COLUMNS)
    }

    /// Moves to the left column within the current row.
    pub(super) fn handle_cursor_left(&mut self) -> Option<Cmd> {
        let column = self.cursor.checked_rem(COLUMNS).unwrap_or(0);
        if column == 0 {
            return None;
        }
        self.move_cursor_up(1)
    }

    /// Moves to the right column within the current row.
    pub(super) fn handle_cursor_right(&mut self) -> Option<Cmd> {
        let column = self.cursor.checked_rem(COLUMNS).unwrap_or(0);
        if column.saturating_add(1) >= COLUMNS {
            return None;
        }
        self.move_cursor_down(1)
    }

    /// Handles page up navigation.
    pub(super) fn handle_page_up(&mut self) -> Option<Cmd> {
        let step = self.page_step();
        self.move_cursor_up(step)
    }

    /// Handles page down navigation.
    pub(super) fn handle_page_down(&mut self) -> Option<Cmd> {
        let step = self.page_step();
        self.move_cursor_down(step)
    }

    /// Jumps back to the first entry with the banner visible.
    pub(super) const fn handle_scroll_to_top(&mut self) -> Option<Cmd> {
        self.first_row = 0;
        self.cursor = 0;
        None
    }

    /// Moves the selection to the last loaded entry.
    pub(super) fn handle_end(&mut self) -> Option<Cmd> {
        self.cursor = self.list.item_count().saturating_sub(1);
        self.after_viewport_change()
    }
}
