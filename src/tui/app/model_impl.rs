//! `Model` trait implementation for the catalog TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `CatalogApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use bubbletea_widgets::spinner::TickMsg;
use unicode_width::UnicodeWidthChar;

use super::CatalogApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for CatalogApp {
    fn init() -> (Self, Option<Cmd>) {
        let settings = crate::tui::get_view_settings();
        let (width, height) = crate::tui::get_initial_terminal_size();
        let mut model = Self::new(settings).with_size(width, height);

        if let Some(gateway) = crate::tui::get_catalog_gateway() {
            model = model.with_fetch_context(gateway, crate::tui::get_telemetry_sink());
        }

        let fetch = model.start();
        let spin = model.spinner_tick_cmd();
        (model, Some(bubbletea_rs::batch(vec![fetch, spin])))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if msg.is::<TickMsg>() {
            return self.spinner.update(msg);
        }

        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        if self.list.is_loading() {
            return self.normalise_viewport(&self.render_loading_screen());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_body(self.body_height()));
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl CatalogApp {
    /// Command delivering the spinner's first animation tick.
    pub(super) fn spinner_tick_cmd(&self) -> Cmd {
        let tick = self.spinner.tick_msg();
        Box::pin(async move { Some(Box::new(tick) as Box<dyn Any + Send>) })
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width and
    /// padded with spaces so shorter rows overwrite stale cells after a
    /// resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Pads or truncates `line` to `width` visible columns.
///
/// Escape sequences are copied through without counting towards the width,
/// and a reset is appended when the line was cut inside styled text.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible = 0usize;
    let mut in_escape = false;
    let mut styled = false;

    for ch in line.chars() {
        if in_escape {
            output.push(ch);
            in_escape = !ch.is_ascii_alphabetic();
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            styled = true;
            output.push(ch);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible = visible.saturating_add(char_width);
    }

    output.push_str(&" ".repeat(width.saturating_sub(visible)));
    if styled && !output.ends_with("\x1b[0m") {
        output.push_str("\x1b[0m");
    }
    output
}
