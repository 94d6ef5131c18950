//! Two-column grid of catalog entries.
//!
//! Each entry is a fixed-size cell: an image placeholder line followed by
//! the name on at most two lines and a blank spacer. Only the rows inside the
//! visible window are rendered.

use crate::catalog::Beer;

use super::text_truncate::{pad_to_width, wrap_two_lines};

/// Number of cells per grid row.
pub const COLUMNS: usize = 2;

/// Terminal lines occupied by one grid row.
pub const CELL_HEIGHT: usize = 4;

/// Columns reserved for the selection marker and indent.
const CELL_GUTTER: usize = 2;

/// Context for rendering the grid view.
#[derive(Debug, Clone)]
pub struct BeerGridViewContext<'a> {
    /// All loaded entries in list order.
    pub beers: &'a [Beer],
    /// Index of the selected entry.
    pub cursor: usize,
    /// First grid row to render.
    pub first_row: usize,
    /// Number of grid rows that fit in the viewport.
    pub visible_rows: usize,
    /// Usable terminal width in columns.
    pub max_width: usize,
}

/// Component rendering the catalog grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeerGridComponent;

impl BeerGridComponent {
    /// Creates a new grid component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the visible rows of the grid.
    #[must_use]
    pub fn view(&self, ctx: &BeerGridViewContext<'_>) -> String {
        if ctx.beers.is_empty() {
            return "  No beers to show. Press r to refresh.\n".to_owned();
        }

        let width = cell_width(ctx.max_width);
        let mut output = String::new();

        for (row_index, row) in ctx
            .beers
            .chunks(COLUMNS)
            .enumerate()
            .skip(ctx.first_row)
            .take(ctx.visible_rows)
        {
            let first_index = row_index.saturating_mul(COLUMNS);
            let cells: Vec<Vec<String>> = row
                .iter()
                .enumerate()
                .map(|(column, beer)| {
                    let selected = first_index.saturating_add(column) == ctx.cursor;
                    render_cell(beer, selected, width)
                })
                .collect();

            for line in 0..CELL_HEIGHT {
                let parts: Vec<&str> = cells
                    .iter()
                    .filter_map(|cell| cell.get(line))
                    .map(String::as_str)
                    .collect();
                output.push_str(parts.join(" ").trim_end());
                output.push('\n');
            }
        }

        output
    }
}

/// Number of grid rows needed for `item_count` entries.
#[must_use]
pub const fn row_count(item_count: usize) -> usize {
    item_count.div_ceil(COLUMNS)
}

/// Grid row holding the entry at `index`.
#[must_use]
pub const fn row_of(index: usize) -> usize {
    match index.checked_div(COLUMNS) {
        Some(row) => row,
        None => 0,
    }
}

fn cell_width(max_width: usize) -> usize {
    max_width
        .saturating_sub(1)
        .checked_div(COLUMNS)
        .unwrap_or(0)
        .max(CELL_GUTTER.saturating_add(1))
}

fn render_cell(beer: &Beer, selected: bool, width: usize) -> Vec<String> {
    let marker = if selected { '>' } else { ' ' };
    let text_width = width.saturating_sub(CELL_GUTTER);
    let image = beer
        .image_name()
        .map_or_else(|| "[no image]".to_owned(), |name| format!("[{name}]"));
    let [first, second] = wrap_two_lines(&beer.name, text_width);

    vec![
        format!("{marker} {}", pad_to_width(&image, text_width)),
        format!("  {}", pad_to_width(&first, text_width)),
        format!("  {}", pad_to_width(&second, text_width)),
        " ".repeat(width),
    ]
}
