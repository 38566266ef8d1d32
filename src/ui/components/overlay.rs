//! Detail overlay component renderer.
//!
//! Renders the modal panel for a single listing on top of the card area:
//! bordered box, the listing name in the top border, and a body with rating,
//! location, price, image reference, wrapped description, and the complete
//! service list. The panel geometry comes from
//! [`crate::ui::layout::overlay_rect`], the same rectangle mouse hit-testing
//! uses to decide what counts as "outside".

use crate::ui::helpers::{position_cursor, truncate, wrap_text};
use crate::ui::layout::{overlay_rect, Rect};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OverlayView;

/// Renders the detail overlay panel centered in the frame.
pub fn render_overlay(overlay: &OverlayView, theme: &Theme, rows: usize, cols: usize) {
    let rect = overlay_rect(rows, cols);
    let inner_width = rect.width.saturating_sub(4);

    render_top_border(&rect, &overlay.title, theme);

    let mut body: Vec<String> = Vec::new();
    body.push(format!("{}   {}", overlay.rating_label, overlay.location));
    body.push(format!("Average price: {}", overlay.price));
    if !overlay.image.is_empty() {
        body.push(format!("Image: {}", overlay.image));
    }
    body.push(String::new());
    body.extend(wrap_text(&overlay.description, inner_width));
    if !overlay.services.is_empty() {
        body.push(String::new());
        body.push("Extra services:".to_string());
        for service in &overlay.services {
            body.push(format!("  • {service}"));
        }
    }

    let body_rows = rect.height.saturating_sub(2);
    for offset in 0..body_rows {
        let line = body.get(offset).map(String::as_str).unwrap_or("");
        render_body_line(&rect, offset + 1, line, theme);
    }

    render_bottom_border(&rect, theme);
}

/// Top border with the listing name embedded: `┌─ Name ───…──┐`.
fn render_top_border(rect: &Rect, title: &str, theme: &Theme) {
    let inner = rect.width.saturating_sub(2);
    let title = truncate(title, inner.saturating_sub(4));
    let title_len = title.chars().count();

    position_cursor(rect.top, rect.left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("┌─");
    print!("{}", Theme::bold());
    print!(" {title} ");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("{}┐", "─".repeat(inner.saturating_sub(title_len + 4)));
    print!("{}", Theme::reset());
}

/// One body row: side borders, padded content, clipped to the panel width.
fn render_body_line(rect: &Rect, offset: usize, line: &str, theme: &Theme) {
    let inner = rect.width.saturating_sub(2);
    let content_width = inner.saturating_sub(2);
    let content = truncate(line, content_width);
    let content_len = content.chars().count();

    position_cursor(rect.top + offset, rect.left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" {content}{} ", " ".repeat(content_width.saturating_sub(content_len)));
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("│");
    print!("{}", Theme::reset());
}

/// Bottom border with the close hint: `└───…─ Esc to close ─┘`.
fn render_bottom_border(rect: &Rect, theme: &Theme) {
    let inner = rect.width.saturating_sub(2);
    let hint = " Esc to close ";
    let hint_len = hint.chars().count();

    position_cursor(rect.top + rect.height.saturating_sub(1), rect.left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("└{}", "─".repeat(inner.saturating_sub(hint_len + 1)));
    print!("{}", Theme::dim());
    print!("{hint}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("─┘");
    print!("{}", Theme::reset());
}
