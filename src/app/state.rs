//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! browser, along with the methods that mutate it in response to events and
//! the projection that turns it into a renderable view model. It is the
//! single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates the loaded data (the listing store) from derived
//! state (filtered results, clamped selection) and presentation state (input
//! mode, overlay visibility, filter controls). Every mutation that touches
//! the criteria or the sort key reruns the pipeline; view models are computed
//! on demand from a state snapshot and contain no business logic.

use crate::domain::criteria::{FilterCriteria, SortKey};
use crate::domain::pipeline;
use crate::domain::Listing;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ButtonView, CardView, CatalogViewModel, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo,
    LoadErrorInfo, OverlayView, SearchBarInfo, ServiceBoxView,
};

use super::modes::{InputMode, SearchFocus};

/// Minimum-rating quick filter presets, in button order.
///
/// Index 0 ("All") is the default and places no bound on the rating.
pub const RATING_PRESETS: [f64; 4] = [0.0, 3.0, 4.0, 4.5];

/// Button label for a rating preset.
#[must_use]
pub fn rating_preset_label(index: usize) -> String {
    if index == 0 {
        "All".to_string()
    } else {
        format!("{:.1}+", RATING_PRESETS[index])
    }
}

/// Maximum characters of a listing name shown on a card before truncation.
const CARD_NAME_MAX: usize = 40;

/// One service checkbox control.
///
/// Controls are generated once after the catalog loads, from the deduplicated
/// union of every service label across all listings, in first-appearance
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFilter {
    /// Service label as it appears in the catalog.
    pub label: String,

    /// Whether the checkbox is currently checked.
    pub checked: bool,
}

/// Catalog load lifecycle.
///
/// The browser starts in `Loading`, moves to `Ready` exactly once on a
/// successful load, or to `Failed` terminally; there is no retry within a
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// The worker has not answered yet; the card grid stays empty.
    Loading,

    /// The store is populated and the pipeline runs normally.
    Ready,

    /// The load failed; carries the user-facing inline message.
    Failed(String),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The full listing store, in source order. Populated once, never mutated.
    pub listings: Vec<Listing>,

    /// Listings passing the current criteria, in the current sort order.
    ///
    /// Recomputed by [`AppState::apply_pipeline`] after every criteria or
    /// sort-key change.
    pub results: Vec<Listing>,

    /// Current filter criteria, passed explicitly into the pipeline.
    pub criteria: FilterCriteria,

    /// Current sort key. Exactly one sort button is active at a time.
    pub sort: SortKey,

    /// Index of the active rating preset in [`RATING_PRESETS`]. Exactly one
    /// rating button is active at a time.
    pub rating_index: usize,

    /// Zero-based index of the selected card within `results`.
    ///
    /// Clamped to valid bounds by `apply_pipeline`; wraps during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Detail overlay visibility: `Some(listing id)` when visible.
    ///
    /// Only ids present in the store ever end up here; requests for unknown
    /// ids leave the field untouched.
    pub overlay: Option<i64>,

    /// Service checkbox controls, one per unique service label.
    pub service_filters: Vec<ServiceFilter>,

    /// Catalog load lifecycle.
    pub load_phase: LoadPhase,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Human-readable catalog source, used in failure and loading text.
    pub source_label: String,
}

impl AppState {
    /// Creates the initial application state: empty store, identity filter,
    /// loading phase.
    #[must_use]
    pub fn new(theme: Theme, source_label: String) -> Self {
        Self {
            listings: Vec::new(),
            results: Vec::new(),
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            rating_index: 0,
            selected_index: 0,
            input_mode: InputMode::Normal,
            overlay: None,
            service_filters: Vec::new(),
            load_phase: LoadPhase::Loading,
            theme,
            source_label,
        }
    }

    /// Installs the loaded catalog and derives everything that depends on it.
    ///
    /// Builds the service filter controls from the union of all service
    /// labels (deduplicated, first-appearance order), marks the load phase
    /// ready, and runs the pipeline for the first time.
    pub fn set_catalog(&mut self, listings: Vec<Listing>) {
        let mut seen: Vec<String> = Vec::new();
        for listing in &listings {
            for service in &listing.services {
                if !seen.contains(service) {
                    seen.push(service.clone());
                }
            }
        }
        self.service_filters = seen
            .into_iter()
            .map(|label| ServiceFilter { label, checked: false })
            .collect();

        tracing::debug!(
            listing_count = listings.len(),
            service_count = self.service_filters.len(),
            "catalog installed"
        );

        self.listings = listings;
        self.load_phase = LoadPhase::Ready;
        self.apply_pipeline();
    }

    /// Marks the load as terminally failed and composes the inline message.
    pub fn set_load_failure(&mut self) {
        self.load_phase = LoadPhase::Failed(format!(
            "Could not load the listing data. Check that {} exists and contains valid JSON.",
            self.source_label
        ));
    }

    /// Reruns the filter/sort pipeline and clamps the selection.
    ///
    /// Must be called after every change to the criteria or the sort key;
    /// all mutating methods on this type do so themselves.
    pub fn apply_pipeline(&mut self) {
        self.results = pipeline::apply(&self.listings, &self.criteria, self.sort);

        if self.results.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.results.len() - 1);
        }
    }

    /// Moves the selection down one card, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves the selection up one card, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected listing, if any result is visible.
    #[must_use]
    pub fn selected_listing(&self) -> Option<&Listing> {
        self.results.get(self.selected_index)
    }

    /// Opens the detail overlay for a listing id.
    ///
    /// An id not present in the store leaves the overlay state unchanged:
    /// still hidden, or still showing its previous content. The miss is
    /// neither surfaced nor logged.
    pub fn open_overlay(&mut self, id: i64) {
        if self.listings.iter().any(|listing| listing.id == id) {
            self.overlay = Some(id);
        }
    }

    /// Hides the detail overlay.
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Resolves the overlay id against the store.
    #[must_use]
    pub fn overlay_listing(&self) -> Option<&Listing> {
        let id = self.overlay?;
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Toggles one service checkbox and recomputes the required-service set
    /// from all currently checked controls.
    ///
    /// Returns `false` without changing anything when the index does not name
    /// a control.
    pub fn toggle_service(&mut self, index: usize) -> bool {
        let Some(filter) = self.service_filters.get_mut(index) else {
            return false;
        };
        filter.checked = !filter.checked;

        self.criteria.services = self
            .service_filters
            .iter()
            .filter(|f| f.checked)
            .map(|f| f.label.clone())
            .collect();

        tracing::debug!(required = ?self.criteria.services, "service filters updated");
        self.apply_pipeline();
        true
    }

    /// Activates a rating preset button by index.
    ///
    /// Indices outside [`RATING_PRESETS`] are ignored.
    pub fn set_rating(&mut self, index: usize) {
        if index >= RATING_PRESETS.len() {
            return;
        }
        self.rating_index = index;
        self.criteria.min_rating = RATING_PRESETS[index];
        tracing::debug!(min_rating = self.criteria.min_rating, "rating preset activated");
        self.apply_pipeline();
    }

    /// Activates the next rating preset, wrapping after the last.
    pub fn cycle_rating(&mut self) {
        self.set_rating((self.rating_index + 1) % RATING_PRESETS.len());
    }

    /// Sets the sort key.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        tracing::debug!(sort = ?sort, "sort key activated");
        self.apply_pipeline();
    }

    /// Returns the window of `results` indices visible with the given card
    /// capacity, centered on the selection like the rest of the pack's list
    /// UIs.
    #[must_use]
    pub fn visible_window(&self, capacity: usize) -> (usize, usize) {
        if self.results.is_empty() || capacity == 0 {
            return (0, 0);
        }

        let mut start = self.selected_index.saturating_sub(capacity / 2);
        let end = (start + capacity).min(self.results.len());

        if end - start < capacity && self.results.len() >= capacity {
            start = end.saturating_sub(capacity);
        }

        (start, end)
    }

    /// Computes a renderable view model from the current state and terminal
    /// dimensions.
    ///
    /// Handles the load lifecycle (loading placeholder, terminal failure
    /// message), the empty-results placeholder, card windowing around the
    /// selection, query-match highlighting, and the overlay projection.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> CatalogViewModel {
        let search_active = matches!(self.input_mode, InputMode::Search(_));

        let mut vm = CatalogViewModel {
            cards: Vec::new(),
            selected_index: 0,
            header: self.compute_header(),
            footer: self.compute_footer(),
            filter_bar: self.compute_filter_bar(),
            search_bar: self.compute_search_bar(),
            empty_state: None,
            load_error: None,
            overlay: self.compute_overlay(),
        };

        match &self.load_phase {
            LoadPhase::Failed(message) => {
                vm.load_error = Some(LoadErrorInfo { message: message.clone() });
                return vm;
            }
            LoadPhase::Loading => {
                vm.empty_state = Some(EmptyState {
                    message: "Loading listings…".to_string(),
                    subtitle: format!("Fetching {}", self.source_label),
                });
                return vm;
            }
            LoadPhase::Ready => {}
        }

        if self.results.is_empty() {
            vm.empty_state = Some(EmptyState {
                message: "No listings match the current criteria.".to_string(),
                subtitle: "Adjust the search text, rating, or service filters.".to_string(),
            });
            return vm;
        }

        let capacity = layout::max_visible_cards(rows, search_active);
        let (start, end) = self.visible_window(capacity);
        let name_max = cols.saturating_sub(12).clamp(10, CARD_NAME_MAX);

        vm.cards = self.results[start..end]
            .iter()
            .enumerate()
            .map(|(offset, listing)| self.compute_card(listing, start + offset, name_max))
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(start);

        vm
    }

    /// Projects one listing into a card, truncating the name to the width
    /// budget and computing query-match highlight ranges over the truncated
    /// text.
    fn compute_card(&self, listing: &Listing, absolute_index: usize, name_max: usize) -> CardView {
        let name = if listing.name.chars().count() > name_max {
            let kept: String = listing.name.chars().take(name_max.saturating_sub(3)).collect();
            format!("{kept}...")
        } else {
            listing.name.clone()
        };

        let query = self.criteria.query.trim().to_lowercase();
        let highlight_ranges = substring_ranges(&name, &query);

        CardView {
            name,
            rating_label: listing.rating_label(),
            location: listing.location.clone(),
            price: listing.price.clone(),
            badges: listing.services.clone(),
            is_selected: absolute_index == self.selected_index,
            highlight_ranges,
        }
    }

    /// Projects the overlay listing, if the overlay is visible.
    fn compute_overlay(&self) -> Option<OverlayView> {
        self.overlay_listing().map(|listing| OverlayView {
            title: listing.name.clone(),
            image: listing.image.clone(),
            rating_label: listing.rating_label(),
            location: listing.location.clone(),
            price: listing.price.clone(),
            description: listing.description.clone(),
            services: listing.services.clone(),
        })
    }

    /// Header title with the shown/total listing counts.
    fn compute_header(&self) -> HeaderInfo {
        let title = match self.load_phase {
            LoadPhase::Ready => format!(
                " Vitrine — {} of {} listings ",
                self.results.len(),
                self.listings.len()
            ),
            _ => " Vitrine ".to_string(),
        };
        HeaderInfo { title }
    }

    /// Context-appropriate keybinding hints for the footer.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.overlay.is_some() {
            "Esc/q: close details  click outside: dismiss".to_string()
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "Esc: exit search  Enter: results  Ctrl+n/p: navigate  type to filter"
                        .to_string()
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "Esc: exit search  /: edit query  j/k: navigate  Enter: details".to_string()
                }
                InputMode::Normal => {
                    "j/k: navigate  Enter: details  /: search  1-9: services  r: rating  o/v/p/n: sort  q: quit"
                        .to_string()
                }
            }
        };
        FooterInfo { keybindings }
    }

    /// Rating buttons, sort buttons, and service checkboxes.
    ///
    /// Exactly one rating button and exactly one sort button are marked
    /// active.
    fn compute_filter_bar(&self) -> FilterBarInfo {
        let rating_buttons = (0..RATING_PRESETS.len())
            .map(|index| ButtonView {
                label: rating_preset_label(index),
                active: index == self.rating_index,
            })
            .collect();

        let sort_buttons = SortKey::ALL
            .iter()
            .map(|key| ButtonView {
                label: key.label().to_string(),
                active: *key == self.sort,
            })
            .collect();

        let services = self
            .service_filters
            .iter()
            .enumerate()
            .map(|(index, filter)| ServiceBoxView {
                label: filter.label.clone(),
                checked: filter.checked,
                hotkey: (index < 9).then(|| char::from(b'1' + index as u8)),
            })
            .collect();

        FilterBarInfo { rating_buttons, sort_buttons, services }
    }

    /// Search bar state when search mode is active.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        matches!(self.input_mode, InputMode::Search(_))
            .then(|| SearchBarInfo { query: self.criteria.query.clone() })
    }
}

/// Character-index ranges of every non-overlapping occurrence of `query`
/// within `text`, compared case-insensitively per character.
///
/// Returns an empty vector for an empty query. Ranges are `(start, end)` with
/// exclusive end, in character (not byte) indices, matching what the
/// highlight renderer consumes.
fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }

    let lower = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(lower).collect();
    let needle: Vec<char> = query.chars().map(lower).collect();

    if needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut at = 0;
    while at + needle.len() <= haystack.len() {
        if haystack[at..at + needle.len()] == needle[..] {
            ranges.push((at, at + needle.len()));
            at += needle.len();
        } else {
            at += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> AppState {
        let mut zeta = Listing::new(1, "Zeta Cuts", "Riverside", "R$ 50,00", 4.0);
        zeta.services = vec!["Beard Trim".to_string(), "Hot Towel".to_string()];

        let mut alpha = Listing::new(2, "Alpha Lounge", "Old Town", "R$ 10,00", 4.8);
        alpha.services = vec!["Beard Trim".to_string()];

        let mut mu = Listing::new(3, "Mu Studio", "Harbor District", "R$ 30,00", 3.5);
        mu.services = vec!["Hair Dye".to_string(), "Beard Trim".to_string()];

        let mut state = AppState::new(Theme::default(), "listings.json".to_string());
        state.set_catalog(vec![zeta, alpha, mu]);
        state
    }

    /// What: service controls are the deduplicated union in first-appearance order
    #[test]
    fn set_catalog_builds_service_controls() {
        let state = loaded_state();
        let labels: Vec<&str> =
            state.service_filters.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Beard Trim", "Hot Towel", "Hair Dye"]);
        assert!(state.service_filters.iter().all(|f| !f.checked));
        assert_eq!(state.load_phase, LoadPhase::Ready);
        assert_eq!(state.results.len(), 3);
    }

    /// What: checking two boxes then unchecking one leaves exactly the still-checked label
    #[test]
    fn toggle_service_recomputes_required_set() {
        let mut state = loaded_state();
        assert!(state.toggle_service(0));
        assert!(state.toggle_service(1));
        assert_eq!(state.criteria.services, ["Beard Trim", "Hot Towel"]);

        assert!(state.toggle_service(0));
        assert_eq!(state.criteria.services, ["Hot Towel"]);
    }

    /// What: a toggle outside the control range changes nothing
    #[test]
    fn toggle_service_ignores_unknown_index() {
        let mut state = loaded_state();
        assert!(!state.toggle_service(10));
        assert!(state.criteria.services.is_empty());
    }

    /// What: cycling the rating presets keeps the index valid and wraps to All
    #[test]
    fn cycle_rating_wraps() {
        let mut state = loaded_state();
        for _ in 0..RATING_PRESETS.len() {
            state.cycle_rating();
        }
        assert_eq!(state.rating_index, 0);
        assert_eq!(state.criteria.min_rating, 0.0);
    }

    /// What: a rating index outside the presets is ignored
    #[test]
    fn set_rating_ignores_unknown_index() {
        let mut state = loaded_state();
        state.set_rating(1);
        state.set_rating(99);
        assert_eq!(state.rating_index, 1);
        assert_eq!(state.criteria.min_rating, RATING_PRESETS[1]);
    }

    /// What: exactly one rating and one sort button is active in the view model
    #[test]
    fn filter_bar_marks_one_active_button_per_group() {
        let mut state = loaded_state();
        state.cycle_rating();
        state.set_sort(SortKey::PriceAsc);

        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.filter_bar.rating_buttons.iter().filter(|b| b.active).count(), 1);
        assert_eq!(vm.filter_bar.sort_buttons.iter().filter(|b| b.active).count(), 1);
        assert!(vm.filter_bar.rating_buttons[1].active);
        assert!(vm.filter_bar.sort_buttons[2].active);
    }

    /// What: opening the overlay for an unknown id leaves overlay state unchanged
    #[test]
    fn open_overlay_ignores_unknown_id() {
        let mut state = loaded_state();
        state.open_overlay(99);
        assert_eq!(state.overlay, None);

        state.open_overlay(2);
        assert_eq!(state.overlay, Some(2));

        state.open_overlay(99);
        assert_eq!(state.overlay, Some(2));
    }

    /// What: the overlay projection carries every detail field
    #[test]
    fn overlay_projection_is_complete() {
        let mut state = loaded_state();
        state.open_overlay(1);

        let overlay = state.compute_viewmodel(30, 80).overlay.expect("overlay");
        assert_eq!(overlay.title, "Zeta Cuts");
        assert_eq!(overlay.location, "Riverside");
        assert_eq!(overlay.price, "R$ 50,00");
        assert_eq!(overlay.services, ["Beard Trim", "Hot Towel"]);
    }

    /// What: empty results render one placeholder and zero cards
    #[test]
    fn empty_results_render_placeholder_only() {
        let mut state = loaded_state();
        state.criteria.query = "no such place".to_string();
        state.apply_pipeline();

        let vm = state.compute_viewmodel(30, 80);
        assert!(vm.cards.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(vm.load_error.is_none());
    }

    /// What: a failed load projects the inline error naming the source
    #[test]
    fn failed_load_projects_error_message() {
        let mut state = AppState::new(Theme::default(), "listings.json".to_string());
        state.set_load_failure();

        let vm = state.compute_viewmodel(30, 80);
        let error = vm.load_error.expect("load error");
        assert!(error.message.contains("listings.json"));
        assert!(vm.cards.is_empty());
    }

    /// What: selection clamps when the result set shrinks under it
    #[test]
    fn selection_clamps_on_shrinking_results() {
        let mut state = loaded_state();
        state.selected_index = 2;
        state.criteria.query = "alpha".to_string();
        state.apply_pipeline();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_listing().map(|l| l.name.as_str()), Some("Alpha Lounge"));
    }

    /// What: selection wraps in both directions
    #[test]
    fn selection_wraps() {
        let mut state = loaded_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    /// What: substring highlighting finds all case-insensitive occurrences
    #[test]
    fn substring_ranges_cases() {
        assert_eq!(substring_ranges("Alpha Lounge", "a"), vec![(0, 1), (4, 5)]);
        assert_eq!(substring_ranges("Alpha Lounge", "lounge"), vec![(6, 12)]);
        assert!(substring_ranges("Alpha Lounge", "").is_empty());
        assert!(substring_ranges("Alpha", "alphas").is_empty());
    }
}
