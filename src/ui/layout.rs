//! Frame layout arithmetic shared by renderers and hit-testing.
//!
//! All coordinates are 1-indexed terminal cells, matching the cursor
//! positioning escape sequences the components emit. Keeping the numbers in
//! one place is what lets mouse clicks resolve against exactly the geometry
//! the renderer drew.
//!
//! # Frame structure
//!
//! ```text
//! row 1          blank
//! row 2          header
//! row 3          border
//! row 4          rating + sort buttons  (BUTTON_ROW)
//! row 5          service checkboxes     (SERVICE_ROW)
//! row 6          border
//! rows 7..9      search box (search mode only)
//! rows N..       cards, CARD_HEIGHT rows each
//! row rows-1     border
//! row rows       footer
//! ```

/// Rows occupied by one listing card.
pub const CARD_HEIGHT: usize = 4;

/// Row of the rating and sort buttons.
pub const BUTTON_ROW: usize = 4;

/// Row of the service checkboxes.
pub const SERVICE_ROW: usize = 5;

/// Leading label of the button line. The labels live here, next to the span
/// arithmetic, so hit-testing always matches the columns the filter-bar
/// renderer draws.
pub const RATING_LABEL: &str = " Rating: ";

/// Label between the rating and sort button groups.
pub const SORT_LABEL: &str = "  Sort: ";

/// Leading label of the service line.
pub const SERVICES_LABEL: &str = " Services: ";

/// Columns a button occupies beyond its label (one space each side).
pub const BUTTON_PAD: usize = 2;

/// Columns a service control occupies beyond its label (hotkey digit,
/// checkbox, trailing gap).
pub const SERVICE_PAD: usize = 7;

/// Chrome rows in normal mode: blank, header, two borders around the filter
/// bar's two lines, plus the bottom border and footer.
const CHROME_NORMAL: usize = 8;

/// Search mode adds the three-line search box.
const CHROME_SEARCH: usize = CHROME_NORMAL + 3;

/// First row of the card list.
#[must_use]
pub const fn cards_start_row(search_active: bool) -> usize {
    if search_active {
        10
    } else {
        7
    }
}

/// How many whole cards fit in the card area.
#[must_use]
pub const fn max_visible_cards(rows: usize, search_active: bool) -> usize {
    let chrome = if search_active { CHROME_SEARCH } else { CHROME_NORMAL };
    rows.saturating_sub(chrome) / CARD_HEIGHT
}

/// Maps a terminal row to a window-relative card index.
///
/// Returns `None` for rows above the card area or past the last visible card.
#[must_use]
pub const fn card_at(row: usize, start_row: usize, visible: usize) -> Option<usize> {
    if row < start_row {
        return None;
    }
    let index = (row - start_row) / CARD_HEIGHT;
    if index < visible {
        Some(index)
    } else {
        None
    }
}

/// A control resolved from a click on [`BUTTON_ROW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterButton {
    /// Rating preset button, by index.
    Rating(usize),
    /// Sort key button, by index.
    Sort(usize),
}

/// Maps a column on [`BUTTON_ROW`] to the button drawn there.
///
/// Takes the display widths of the two groups' button labels and walks the
/// same prefixes and padding the renderer uses. Columns on the group labels
/// or past the last button resolve to `None`.
#[must_use]
pub fn button_at(col: usize, rating_widths: &[usize], sort_widths: &[usize]) -> Option<FilterButton> {
    let mut used = RATING_LABEL.len();
    for (index, &width) in rating_widths.iter().enumerate() {
        let entry = width + BUTTON_PAD;
        if col > used && col <= used + entry {
            return Some(FilterButton::Rating(index));
        }
        used += entry;
    }

    used += SORT_LABEL.len();
    for (index, &width) in sort_widths.iter().enumerate() {
        let entry = width + BUTTON_PAD;
        if col > used && col <= used + entry {
            return Some(FilterButton::Sort(index));
        }
        used += entry;
    }

    None
}

/// Maps a column on [`SERVICE_ROW`] to the checkbox drawn there.
///
/// `cols` bounds the hit-test exactly the way it bounds the renderer:
/// controls that did not fit the line are not clickable.
#[must_use]
pub fn service_at(col: usize, service_widths: &[usize], cols: usize) -> Option<usize> {
    let mut used = SERVICES_LABEL.len();
    for (index, &width) in service_widths.iter().enumerate() {
        let entry = width + SERVICE_PAD;
        if used + entry > cols {
            return None;
        }
        if col > used && col <= used + entry {
            return Some(index);
        }
        used += entry;
    }
    None
}

/// A rectangle of terminal cells, 1-indexed, inclusive of its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Topmost row.
    pub top: usize,
    /// Leftmost column.
    pub left: usize,
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl Rect {
    /// Whether the cell at `(row, col)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top
            && row < self.top + self.height
            && col >= self.left
            && col < self.left + self.width
    }
}

/// Placement of the detail overlay panel, centered in the frame.
#[must_use]
pub fn overlay_rect(rows: usize, cols: usize) -> Rect {
    let width = cols.saturating_sub(10).clamp(24, 70);
    let height = rows.saturating_sub(6).clamp(7, 18);
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = cols.saturating_sub(width) / 2 + 1;
    Rect { top, left, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: card hit-testing maps rows to indices and rejects chrome rows
    #[test]
    fn card_at_maps_rows() {
        let start = cards_start_row(false);
        assert_eq!(card_at(start, start, 3), Some(0));
        assert_eq!(card_at(start + CARD_HEIGHT - 1, start, 3), Some(0));
        assert_eq!(card_at(start + CARD_HEIGHT, start, 3), Some(1));
        assert_eq!(card_at(1, start, 3), None);
        assert_eq!(card_at(start + 3 * CARD_HEIGHT, start, 3), None);
    }

    /// What: the card area shrinks by three rows in search mode
    #[test]
    fn search_mode_costs_three_rows() {
        assert_eq!(cards_start_row(false), 7);
        assert_eq!(cards_start_row(true), 10);
        assert!(max_visible_cards(30, true) <= max_visible_cards(30, false));
    }

    /// What: the overlay stays inside the frame and detects containment
    #[test]
    fn overlay_rect_is_contained() {
        let rect = overlay_rect(30, 80);
        assert!(rect.top >= 1 && rect.left >= 1);
        assert!(rect.top + rect.height <= 31);
        assert!(rect.left + rect.width <= 81);

        assert!(rect.contains(rect.top, rect.left));
        assert!(rect.contains(rect.top + rect.height - 1, rect.left + rect.width - 1));
        assert!(!rect.contains(rect.top - 1, rect.left));
        assert!(!rect.contains(rect.top, rect.left + rect.width));
    }

    /// What: button hit-testing walks the same spans the renderer draws
    #[test]
    fn button_at_maps_columns() {
        let rating = [3, 4]; // "All", "3.0+"
        let sort = [8, 6]; // "original", "rating"

        // " Rating: " is 9 columns; the first button spans 10..=14
        assert_eq!(button_at(9, &rating, &sort), None);
        assert_eq!(button_at(10, &rating, &sort), Some(FilterButton::Rating(0)));
        assert_eq!(button_at(14, &rating, &sort), Some(FilterButton::Rating(0)));
        assert_eq!(button_at(15, &rating, &sort), Some(FilterButton::Rating(1)));

        // "  Sort: " separates the groups; a click on it hits nothing
        let sort_start = 9 + 5 + 6 + 8;
        assert_eq!(button_at(sort_start, &rating, &sort), None);
        assert_eq!(button_at(sort_start + 1, &rating, &sort), Some(FilterButton::Sort(0)));
        assert_eq!(button_at(sort_start + 11, &rating, &sort), Some(FilterButton::Sort(1)));
        assert_eq!(button_at(200, &rating, &sort), None);
    }

    /// What: service hit-testing respects the renderer's truncation bound
    #[test]
    fn service_at_maps_columns() {
        let widths = [10, 9]; // "Beard Trim", "Hot Towel"

        // " Services: " is 11 columns; the first control spans 12..=28
        assert_eq!(service_at(11, &widths, 80), None);
        assert_eq!(service_at(12, &widths, 80), Some(0));
        assert_eq!(service_at(28, &widths, 80), Some(0));
        assert_eq!(service_at(29, &widths, 80), Some(1));
        assert_eq!(service_at(60, &widths, 80), None);

        // A terminal too narrow for the second control drops it from the
        // hit-test the same way the renderer drops it from the line.
        assert_eq!(service_at(29, &widths, 30), None);
        assert_eq!(service_at(12, &widths, 30), Some(0));
    }

    /// What: tiny terminals never underflow the layout math
    #[test]
    fn degenerate_sizes_are_safe() {
        assert_eq!(max_visible_cards(5, false), 0);
        let rect = overlay_rect(4, 10);
        assert!(rect.width >= 1 && rect.height >= 1);
    }
}
