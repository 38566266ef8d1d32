//! Empty state component renderer.
//!
//! Renders the placeholder shown when the card area has nothing to display:
//! the catalog is still loading, or no listing matches the current criteria.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state placeholder inside the card area.
///
/// Displays a centered two-line message a few rows below the top of the card
/// area. An empty result set always renders exactly one placeholder message
/// and zero cards.
pub fn render_empty_state(start_row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let row = start_row + 2;

    let msg_len = empty.message.chars().count();
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
