//! Filter bar component renderer.
//!
//! Renders the two-line filter bar: rating presets and sort buttons on the
//! first line, service checkboxes on the second. The active button of each
//! group is drawn with the active-filter colors so exactly one per group
//! reads as pressed. Every control is clickable; the group labels, paddings,
//! and per-control widths come from [`crate::ui::layout`] so mouse
//! hit-testing resolves against exactly the columns drawn here.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{BUTTON_PAD, RATING_LABEL, SERVICES_LABEL, SERVICE_PAD, SORT_LABEL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ButtonView, FilterBarInfo, ServiceBoxView};

/// Renders the filter bar at the specified row.
///
/// Returns the next available row (row + 2).
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    render_button_line(row, bar, theme, cols);
    render_service_line(row + 1, &bar.services, theme, cols);
    row + 2
}

/// First line: `Rating: [All] 3.0+ …   Sort: [original] rating …`.
fn render_button_line(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{RATING_LABEL}");

    let mut used = RATING_LABEL.len();
    used += render_buttons(&bar.rating_buttons, theme);

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{SORT_LABEL}");
    used += SORT_LABEL.len();
    used += render_buttons(&bar.sort_buttons, theme);

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
}

/// Renders one button group; returns the number of columns consumed.
fn render_buttons(buttons: &[ButtonView], theme: &Theme) -> usize {
    let mut used = 0;
    for button in buttons {
        if button.active {
            print!("{}", Theme::fg(&theme.colors.active_filter_fg));
            print!("{}", Theme::bg(&theme.colors.active_filter_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!(" {} ", button.label);
        print!("{}", Theme::reset());
        used += button.label.chars().count() + BUTTON_PAD;
    }
    used
}

/// Second line: `Services: 1[x] Beard Trim  2[ ] Hot Towel …`.
///
/// Controls past the terminal edge are dropped rather than wrapped; the
/// hit-test applies the same bound, so a dropped control is never clickable.
fn render_service_line(row: usize, services: &[ServiceBoxView], theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{SERVICES_LABEL}");
    let mut used = SERVICES_LABEL.len();

    if services.is_empty() {
        print!("{}", Theme::dim());
        print!("(none)");
        used += 6;
    }

    for service in services {
        let entry_len = service.label.chars().count() + SERVICE_PAD;
        if used + entry_len > cols {
            break;
        }

        let hotkey = service.hotkey.map_or("·".to_string(), |k| k.to_string());
        let mark = if service.checked { "x" } else { " " };

        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{hotkey}");
        if service.checked {
            print!("{}", Theme::fg(&theme.colors.badge_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("[{mark}] {}  ", service.label);
        used += entry_len;
    }

    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
}
