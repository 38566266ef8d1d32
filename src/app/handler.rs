//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! worker responses, translating them into state changes and action
//! sequences. Every interaction is an event → state mutation → pipeline
//! rerun triple; the handler is the only place those triples are wired up,
//! which keeps the dispatch table explicit and testable (no control is bound
//! to behavior anywhere else).
//!
//! # Event Categories
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenSelected`
//! - **Search input**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `Char`, `Backspace`
//! - **Filters and sorting**: `ToggleService`, `CycleRating`, `SetSort`
//! - **Overlay**: `CloseOverlay`, `Escape`, `Click`
//! - **System**: `Quit`, `WorkerResponse`

use crate::app::{Action, AppState};
use crate::domain::criteria::SortKey;
use crate::domain::error::Result;
use crate::ui::layout;
use crate::worker::WorkerResponse;

use super::modes::{InputMode, SearchFocus};
use super::state::{rating_preset_label, RATING_PRESETS};

/// Events triggered by user input or the catalog worker.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, so state
/// transitions are deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the selection down one card (wraps to the top).
    KeyDown,
    /// Moves the selection up one card (wraps to the bottom).
    KeyUp,
    /// Opens the detail overlay for the selected card.
    OpenSelected,
    /// Closes the detail overlay (explicit close action).
    CloseOverlay,
    /// Exits the application.
    Quit,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Refocuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Moves focus from the search input to the result list.
    FocusResults,
    /// Exits search mode and clears the text query.
    ExitSearch,
    /// Appends a character to the text query.
    Char(char),
    /// Removes the last character of the text query.
    Backspace,
    /// Cancel key: closes the overlay when visible, otherwise leaves search.
    Escape,
    /// Toggles the service checkbox at the given control index.
    ToggleService(usize),
    /// Activates the next minimum-rating preset button.
    CycleRating,
    /// Activates a sort button.
    SetSort(SortKey),
    /// Mouse click at 1-indexed terminal coordinates.
    ///
    /// Carries the terminal dimensions so hit-testing can reuse the same
    /// layout arithmetic the renderer uses.
    Click { row: usize, col: usize, rows: usize, cols: usize },
    /// Response from the catalog worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns what to do next.
///
/// Returns `(should_render, actions)`: whether the UI needs repainting, and
/// the side effects the shim must execute (currently only [`Action::Quit`]).
///
/// # Errors
///
/// The handler itself is infallible today; the `Result` return keeps the
/// signature stable for handlers that need to fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::OpenSelected => {
            let Some(listing) = state.selected_listing() else {
                // Mirrors search UX elsewhere in the pack: enter on an empty
                // result list drops back to normal mode.
                if matches!(state.input_mode, InputMode::Search(_)) {
                    state.input_mode = InputMode::Normal;
                    state.criteria.query.clear();
                    state.apply_pipeline();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };

            let id = listing.id;
            tracing::debug!(listing_id = id, "opening detail overlay");
            state.open_overlay(id);
            Ok((true, vec![]))
        }
        Event::CloseOverlay => {
            if state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            state.close_overlay();
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.criteria.query.clear();
            state.apply_pipeline();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.criteria.query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.criteria.query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.criteria.query.clear();
            state.apply_pipeline();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            state.criteria.query.push(*c);
            tracing::trace!(query = %state.criteria.query, "text query updated");
            state.apply_pipeline();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }
            state.criteria.query.pop();
            state.apply_pipeline();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.overlay.is_some() {
                state.close_overlay();
                return Ok((true, vec![]));
            }
            if matches!(state.input_mode, InputMode::Search(_)) {
                state.input_mode = InputMode::Normal;
                state.criteria.query.clear();
                state.apply_pipeline();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::ToggleService(index) => {
            let changed = state.toggle_service(*index);
            Ok((changed, vec![]))
        }
        Event::CycleRating => {
            state.cycle_rating();
            Ok((true, vec![]))
        }
        Event::SetSort(sort) => {
            state.set_sort(*sort);
            Ok((true, vec![]))
        }
        Event::Click { row, col, rows, cols } => {
            Ok((handle_click(state, *row, *col, *rows, *cols), vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { listings } => {
                tracing::info!(count = listings.len(), "catalog loaded");
                state.set_catalog(listings.clone());
                Ok((true, vec![]))
            }
            WorkerResponse::LoadFailed { message } => {
                tracing::error!(error = %message, source = %state.source_label, "catalog load failed");
                state.set_load_failure();
                Ok((true, vec![]))
            }
        },
    }
}

/// Resolves a mouse click against the current layout.
///
/// While the overlay is visible, a click outside its panel dismisses it and
/// a click inside is ignored. Otherwise the click is hit-tested against the
/// filter bar (rating/sort buttons and service checkboxes activate exactly
/// like their keys) and then against the card area, where a click selects
/// the card and opens its detail overlay. Returns whether the UI changed.
fn handle_click(state: &mut AppState, row: usize, col: usize, rows: usize, cols: usize) -> bool {
    if state.overlay.is_some() {
        if layout::overlay_rect(rows, cols).contains(row, col) {
            return false;
        }
        state.close_overlay();
        return true;
    }

    if row == layout::BUTTON_ROW {
        let rating_widths: Vec<usize> = (0..RATING_PRESETS.len())
            .map(|index| rating_preset_label(index).chars().count())
            .collect();
        let sort_widths: Vec<usize> =
            SortKey::ALL.iter().map(|key| key.label().chars().count()).collect();

        return match layout::button_at(col, &rating_widths, &sort_widths) {
            Some(layout::FilterButton::Rating(index)) => {
                tracing::debug!(index, "rating button activated by click");
                state.set_rating(index);
                true
            }
            Some(layout::FilterButton::Sort(index)) => {
                tracing::debug!(index, "sort button activated by click");
                state.set_sort(SortKey::ALL[index]);
                true
            }
            None => false,
        };
    }

    if row == layout::SERVICE_ROW {
        let service_widths: Vec<usize> =
            state.service_filters.iter().map(|f| f.label.chars().count()).collect();
        return layout::service_at(col, &service_widths, cols)
            .is_some_and(|index| state.toggle_service(index));
    }

    let search_active = matches!(state.input_mode, InputMode::Search(_));
    let capacity = layout::max_visible_cards(rows, search_active);
    let (start, end) = state.visible_window(capacity);
    let visible = end - start;

    let Some(offset) = layout::card_at(row, layout::cards_start_row(search_active), visible)
    else {
        return false;
    };

    let index = start + offset;
    let Some(id) = state.results.get(index).map(|listing| listing.id) else {
        return false;
    };

    state.selected_index = index;
    tracing::debug!(listing_id = id, "card activated by click");
    state.open_overlay(id);
    true
}

/// Short name of an event for span labels, without payload noise.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::KeyDown => "KeyDown",
        Event::KeyUp => "KeyUp",
        Event::OpenSelected => "OpenSelected",
        Event::CloseOverlay => "CloseOverlay",
        Event::Quit => "Quit",
        Event::SearchMode => "SearchMode",
        Event::FocusSearchBar => "FocusSearchBar",
        Event::FocusResults => "FocusResults",
        Event::ExitSearch => "ExitSearch",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Escape => "Escape",
        Event::ToggleService(_) => "ToggleService",
        Event::CycleRating => "CycleRating",
        Event::SetSort(_) => "SetSort",
        Event::Click { .. } => "Click",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Listing;
    use crate::ui::theme::Theme;

    fn loaded_state() -> AppState {
        let mut first = Listing::new(1, "Zeta Cuts", "Riverside", "R$ 50,00", 4.0);
        first.services = vec!["Beard Trim".to_string()];
        let second = Listing::new(2, "Alpha Lounge", "Old Town", "R$ 10,00", 4.8);

        let mut state = AppState::new(Theme::default(), "listings.json".to_string());
        state.set_catalog(vec![first, second]);
        state
    }

    fn dispatch(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).expect("handler is infallible")
    }

    /// What: typed characters update the query and rerun the pipeline
    #[test]
    fn typing_filters_live() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::SearchMode);
        for c in "alpha".chars() {
            dispatch(&mut state, Event::Char(c));
        }
        assert_eq!(state.criteria.query, "alpha");
        assert_eq!(state.results.len(), 1);

        dispatch(&mut state, Event::Backspace);
        assert_eq!(state.criteria.query, "alph");
    }

    /// What: characters outside typing focus never touch the query
    #[test]
    fn typing_requires_search_focus() {
        let mut state = loaded_state();
        let (rendered, _) = dispatch(&mut state, Event::Char('x'));
        assert!(!rendered);
        assert!(state.criteria.query.is_empty());
    }

    /// What: leaving search clears only the text query, not the other filters
    #[test]
    fn exit_search_clears_query_only() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::ToggleService(0));
        dispatch(&mut state, Event::CycleRating);
        dispatch(&mut state, Event::SearchMode);
        dispatch(&mut state, Event::Char('z'));
        dispatch(&mut state, Event::ExitSearch);

        assert!(state.criteria.query.is_empty());
        assert_eq!(state.criteria.services, ["Beard Trim"]);
        assert!(state.criteria.min_rating > 0.0);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    /// What: enter opens the overlay for the selected card
    #[test]
    fn open_selected_shows_overlay() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::KeyDown);
        dispatch(&mut state, Event::OpenSelected);
        assert_eq!(state.overlay, Some(2));
    }

    /// What: escape closes a visible overlay and does nothing afterwards
    #[test]
    fn escape_closes_overlay() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::OpenSelected);
        assert!(state.overlay.is_some());

        let (rendered, _) = dispatch(&mut state, Event::Escape);
        assert!(rendered);
        assert_eq!(state.overlay, None);

        let (rendered, _) = dispatch(&mut state, Event::Escape);
        assert!(!rendered);
    }

    /// What: a click inside the overlay is ignored, outside dismisses it
    #[test]
    fn click_outside_overlay_dismisses() {
        let mut state = loaded_state();
        dispatch(&mut state, Event::OpenSelected);

        let rect = layout::overlay_rect(30, 80);
        let inside = Event::Click { row: rect.top + 1, col: rect.left + 1, rows: 30, cols: 80 };
        let (rendered, _) = dispatch(&mut state, inside);
        assert!(!rendered);
        assert!(state.overlay.is_some());

        let outside = Event::Click { row: 1, col: 1, rows: 30, cols: 80 };
        let (rendered, _) = dispatch(&mut state, outside);
        assert!(rendered);
        assert_eq!(state.overlay, None);
    }

    /// What: clicking a card selects it and opens its overlay
    #[test]
    fn click_on_card_opens_overlay() {
        let mut state = loaded_state();
        let row = layout::cards_start_row(false) + layout::CARD_HEIGHT;
        dispatch(&mut state, Event::Click { row, col: 4, rows: 30, cols: 80 });
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.overlay, Some(2));
    }

    /// What: clicking the filter bar activates buttons and toggles checkboxes
    #[test]
    fn click_on_filter_bar_controls() {
        let mut state = loaded_state();

        let rating_widths: Vec<usize> = (0..RATING_PRESETS.len())
            .map(|index| rating_preset_label(index).chars().count())
            .collect();
        let sort_widths: Vec<usize> =
            SortKey::ALL.iter().map(|key| key.label().chars().count()).collect();

        let price_col = (1..200)
            .find(|&col| {
                layout::button_at(col, &rating_widths, &sort_widths)
                    == Some(layout::FilterButton::Sort(2))
            })
            .expect("price button column");
        dispatch(
            &mut state,
            Event::Click { row: layout::BUTTON_ROW, col: price_col, rows: 30, cols: 200 },
        );
        assert_eq!(state.sort, SortKey::PriceAsc);

        let rating_col = (1..200)
            .find(|&col| {
                layout::button_at(col, &rating_widths, &sort_widths)
                    == Some(layout::FilterButton::Rating(2))
            })
            .expect("rating button column");
        dispatch(
            &mut state,
            Event::Click { row: layout::BUTTON_ROW, col: rating_col, rows: 30, cols: 200 },
        );
        assert_eq!(state.rating_index, 2);
        assert_eq!(state.criteria.min_rating, RATING_PRESETS[2]);

        let service_widths: Vec<usize> =
            state.service_filters.iter().map(|f| f.label.chars().count()).collect();
        let service_col = (1..200)
            .find(|&col| layout::service_at(col, &service_widths, 200) == Some(0))
            .expect("service checkbox column");
        dispatch(
            &mut state,
            Event::Click { row: layout::SERVICE_ROW, col: service_col, rows: 30, cols: 200 },
        );
        assert_eq!(state.criteria.services, ["Beard Trim"]);
    }

    /// What: a click on the filter-bar labels changes nothing
    #[test]
    fn click_on_filter_bar_chrome_is_ignored() {
        let mut state = loaded_state();
        let (rendered, _) = dispatch(
            &mut state,
            Event::Click { row: layout::BUTTON_ROW, col: 1, rows: 30, cols: 200 },
        );
        assert!(!rendered);
        assert_eq!(state.sort, SortKey::Original);
        assert_eq!(state.rating_index, 0);
        assert!(state.criteria.services.is_empty());
    }

    /// What: a failed load flips the state to the inline error, rendered once
    #[test]
    fn load_failure_sets_error_state() {
        let mut state = AppState::new(Theme::default(), "listings.json".to_string());
        let (rendered, _) = dispatch(
            &mut state,
            Event::WorkerResponse(WorkerResponse::LoadFailed {
                message: "HTTP status 404".to_string(),
            }),
        );
        assert!(rendered);
        assert!(matches!(state.load_phase, crate::app::state::LoadPhase::Failed(_)));
    }

    /// What: quit produces the quit action and no render
    #[test]
    fn quit_emits_action() {
        let mut state = loaded_state();
        let (rendered, actions) = dispatch(&mut state, Event::Quit);
        assert!(!rendered);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
