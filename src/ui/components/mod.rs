//! Composable UI component renderers.
//!
//! Each component renders one part of the frame with direct ANSI output and
//! reports the next free row, so the frame composition below stays a simple
//! top-to-bottom fold. The geometry must agree with [`crate::ui::layout`];
//! hit-testing depends on it.
//!
//! # Components
//!
//! - [`header`]: title bar with listing counts
//! - [`filters`]: rating/sort buttons and service checkboxes
//! - [`search`]: search input box (search mode only)
//! - [`cards`]: the listing card list
//! - [`empty`]: placeholder for loading / no matches
//! - [`error`]: inline load-failure message
//! - [`footer`]: keybinding hints
//! - [`overlay`]: modal detail panel, drawn on top

mod cards;
mod empty;
mod error;
mod filters;
mod footer;
mod header;
mod overlay;
mod search;

pub use overlay::render_overlay;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CatalogViewModel;

use cards::render_cards;
use empty::render_empty_state;
use error::render_load_error;
use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/filters, filters/cards, cards/footer).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full frame below the overlay layer.
///
/// Layout (see [`crate::ui::layout`] for the row arithmetic):
///
/// ```text
/// [blank]
/// [Header]
/// [Border]
/// [Filter bar - 2 lines]
/// [Border]
/// [Search box - 3 lines, search mode only]
/// [Cards | Empty state | Load error]
/// [Border]
/// [Footer]
/// ```
pub fn render_frame(vm: &CatalogViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(error) = &vm.load_error {
        render_load_error(current_row, error, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_cards(current_row, &vm.cards, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
