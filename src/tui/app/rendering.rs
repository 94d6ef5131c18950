//! Rendering logic for the catalog TUI application.
//!
//! These are pure query methods that read state without modification.

use unicode_width::UnicodeWidthStr;

use super::CatalogApp;
use crate::tui::components::BeerGridViewContext;
use crate::tui::components::beer_grid::row_count;
use crate::tui::components::text_truncate::{center, truncate_to_width};

/// Banner shown above the first grid row.
const BANNER: [&str; 3] = [
    "+------------------------------------+",
    "|   TAPLIST  :  craft beer catalogue  |",
    "+------------------------------------+",
];

/// Lines occupied by the banner.
pub(super) const BANNER_HEIGHT: usize = BANNER.len();

/// Hint appended to fetch errors in the status bar.
const RETRY_HINT: &str = "  R: retry";

/// Hint shown at the right of the header.
const SCROLL_TO_TOP_HINT: &str = "t: top";

impl CatalogApp {
    /// Usable width, one column short of the terminal to avoid autowrap.
    fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }

    /// Renders the header with the item count and scroll-to-top hint.
    pub(super) fn render_header(&self) -> String {
        let refreshing = if self.list.is_refreshing() {
            "  [Refreshing...]"
        } else {
            ""
        };
        let left = format!("Items: {}{refreshing}", self.list.item_count());
        let used = UnicodeWidthStr::width(left.as_str())
            .saturating_add(UnicodeWidthStr::width(SCROLL_TO_TOP_HINT));
        let gap = self.content_width().saturating_sub(used).max(2);
        format!("{left}{}{SCROLL_TO_TOP_HINT}\n", " ".repeat(gap))
    }

    /// Renders the banner, visible grid rows and footer.
    ///
    /// The result always holds exactly `body_height` lines so the status bar
    /// stays on the last terminal row.
    pub(super) fn render_body(&self, body_height: usize) -> String {
        let width = self.content_width();
        let mut output = String::new();

        if self.first_row == 0 {
            for line in BANNER {
                output.push_str(&center(line, width));
                output.push('\n');
            }
        }

        let visible_rows = self.visible_rows_from(self.first_row);
        let ctx = BeerGridViewContext {
            beers: self.list.items(),
            cursor: self.cursor,
            first_row: self.first_row,
            visible_rows,
            max_width: width,
        };
        output.push_str(&self.grid.view(&ctx));

        let last_row_visible = self.first_row.saturating_add(visible_rows)
            >= row_count(self.list.item_count());
        if last_row_visible && self.list.item_count() > 0 {
            output.push_str(&self.render_footer());
        }

        let mut lines: Vec<&str> = output.lines().collect();
        lines.truncate(body_height);
        let missing = body_height.saturating_sub(lines.len());
        let mut body = lines.join("\n");
        if !lines.is_empty() {
            body.push('\n');
        }
        body.push_str(&"\n".repeat(missing));
        body
    }

    /// Renders the activity indicator shown below the last grid row.
    pub(super) fn render_footer(&self) -> String {
        if self.list.is_loading_more() {
            return format!("  {} Loading more...\n", self.spinner.view());
        }
        if self.list.is_exhausted() {
            return "  End of catalogue\n".to_owned();
        }
        format!("  {}\n", self.spinner.view())
    }

    /// Renders the status bar.
    ///
    /// Fetch errors only appear when they were enabled in configuration.
    pub(super) fn render_status_bar(&self) -> String {
        if self.settings.show_fetch_errors
            && let Some(failure) = self.list.last_failure()
        {
            let room = self.content_width().saturating_sub(RETRY_HINT.len());
            let message = truncate_to_width(&format!("Error: {}", failure.error), room);
            return format!("{message}{RETRY_HINT}\n");
        }

        let hints = if self.width <= 60 {
            "q:quit  ?:help  r:refresh"
        } else {
            "h/j/k/l:move  r:refresh  t:top  ?:help  q:quit"
        };
        format!("Page {}  {hints}\n", self.list.page())
    }

    /// Renders the full-screen view shown until the first load completes.
    pub(super) fn render_loading_screen(&self) -> String {
        let height = usize::from(self.height);
        let above = height.saturating_sub(1).checked_div(2).unwrap_or(0);
        let message = format!("{} Loading...", self.spinner.view());
        let mut output = "\n".repeat(above);
        output.push_str(&center(&message, self.content_width()));
        output.push('\n');
        output
    }

    /// Renders the help overlay if visible.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move down one row
  k, Up      Move up one row
  h, Left    Move to the left column
  l, Right   Move to the right column
  PgDn       Page down
  PgUp       Page up
  t, Home    Scroll to the top
  End, G     Go to last loaded beer

Other:
  r          Refresh from page 1
  R          Retry the last failed request
  ?          Toggle this help
  q          Quit

More beers load automatically as you approach the end of the list.

Press any key to close this help.
";
        help_text.to_owned()
    }
}
