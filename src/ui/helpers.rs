//! Shared rendering utilities.
//!
//! Low-level helpers used across the component renderers: cursor positioning,
//! screen clearing, match highlighting, and text shaping. Everything here
//! operates on character indices, not byte indices, so multi-byte names never
//! split mid-character.

use crate::ui::theme::Theme;

/// Clears the screen and homes the cursor.
///
/// Emitted once per frame before the components repaint; the render surface
/// replaces prior content wholesale rather than diffing.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for query matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighting is suppressed for selected items, where the
/// selection background already carries the emphasis.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight, `(start, end)` exclusive end
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the item is currently selected
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Truncates text to `max` characters, appending `…` when anything was cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Wraps text into lines of at most `width` characters, breaking on spaces.
///
/// A single word longer than `width` is hard-split rather than overflowing.
/// Returns at least one (possibly empty) line.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() && word_len <= width {
            current.push_str(word);
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut rest: Vec<char> = word.chars().collect();
            while rest.len() > width {
                lines.push(rest.drain(..width).collect());
            }
            current = rest.into_iter().collect();
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: wrapping respects the width and keeps every word
    #[test]
    fn wrap_text_breaks_on_spaces() {
        let lines = wrap_text("walk-ins welcome every day", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "walk-ins welcome every day");
    }

    /// What: an overlong word is hard-split instead of overflowing
    #[test]
    fn wrap_text_splits_long_words() {
        let lines = wrap_text("extraordinarily", 6);
        assert!(lines.iter().all(|l| l.chars().count() <= 6));
        assert_eq!(lines.concat(), "extraordinarily");
    }

    /// What: empty input still yields one line to render
    #[test]
    fn wrap_text_empty_input() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    /// What: truncation counts characters, not bytes
    #[test]
    fn truncate_is_char_aware() {
        assert_eq!(truncate("Pão & Prosa", 20), "Pão & Prosa");
        assert_eq!(truncate("Pão & Prosa", 5), "Pão …");
    }
}
