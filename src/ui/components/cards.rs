//! Card list component renderer.
//!
//! Renders the visible window of listing cards. Each card occupies
//! [`crate::ui::layout::CARD_HEIGHT`] rows: name and rating, location, price,
//! and the service badges. The selected card is drawn with the selection
//! colors across all of its rows.

use crate::ui::helpers::{self, position_cursor, truncate};
use crate::ui::layout::CARD_HEIGHT;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;

/// Renders all visible cards starting at the specified row.
///
/// Returns the next available row.
pub fn render_cards(row: usize, cards: &[CardView], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders a single card.
///
/// ```text
/// ▌ Name                                   ★ 4.8
///   Location
///   Price
///   [badge] [badge] …
/// ```
///
/// Styling precedence on the name line: selection colors, then query-match
/// highlights, then normal text, matching the highlight renderer's rules.
fn render_card(row: usize, card: &CardView, theme: &Theme, cols: usize) -> usize {
    let (text_fg, dim_fg) = if card.is_selected {
        (theme.colors.selection_fg.as_str(), theme.colors.selection_fg.as_str())
    } else {
        (theme.colors.text_normal.as_str(), theme.colors.text_dim.as_str())
    };

    let paint_line = |line_row: usize| {
        position_cursor(line_row, 1);
        if card.is_selected {
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        }
    };

    // Name and rating line
    paint_line(row);
    print!("{}", Theme::fg(text_fg));
    print!("{}", if card.is_selected { "▌ " } else { "  " });
    print!("{}", Theme::bold());
    helpers::render_highlighted_text(&card.name, &card.highlight_ranges, theme, card.is_selected);
    if card.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    let name_len = card.name.chars().count() + 2;
    let rating_len = card.rating_label.chars().count();
    let gap = cols.saturating_sub(name_len + rating_len + 2);
    print!("{}", " ".repeat(gap));
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    print!("{}  ", card.rating_label);
    print!("{}", Theme::reset());

    // Location line
    paint_line(row + 1);
    print!("{}", Theme::fg(dim_fg));
    let location = truncate(&card.location, cols.saturating_sub(6));
    print!("    {location}");
    print!("{}", " ".repeat(cols.saturating_sub(location.chars().count() + 4)));
    print!("{}", Theme::reset());

    // Price line
    paint_line(row + 2);
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    let price = truncate(&card.price, cols.saturating_sub(6));
    print!("    {price}");
    print!("{}", " ".repeat(cols.saturating_sub(price.chars().count() + 4)));
    print!("{}", Theme::reset());

    // Badge line
    paint_line(row + 3);
    print!("    ");
    let mut used = 4;
    for badge in &card.badges {
        let badge_len = badge.chars().count() + 3;
        if used + badge_len > cols {
            break;
        }
        if card.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("[{badge}] ");
        } else {
            print!("{}", Theme::fg(&theme.colors.badge_fg));
            print!("{}", Theme::bg(&theme.colors.badge_bg));
            print!(" {badge} ");
            print!("{}", Theme::reset());
            print!(" ");
        }
        used += badge_len;
    }
    if card.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());

    row + CARD_HEIGHT
}
