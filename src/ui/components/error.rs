//! Load failure component renderer.
//!
//! Renders the inline message shown when the catalog could not be loaded.
//! The failure is terminal for the session, so the message replaces the card
//! area entirely.

use crate::ui::helpers::{position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoadErrorInfo;

/// Renders the load failure message inside the card area.
///
/// The message is wrapped to a comfortable width and centered, in the theme's
/// error color so it reads as a failure rather than an empty result.
pub fn render_load_error(start_row: usize, error: &LoadErrorInfo, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(8).clamp(20, 64);
    let lines = wrap_text(&error.message, width);

    for (offset, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        let padding = cols.saturating_sub(len) / 2;

        position_cursor(start_row + 2 + offset, 1);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print!("{}", " ".repeat(padding));
        print!("{line}");
        print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
        print!("{}", Theme::reset());
    }
}
