//! View model types representing renderable UI state.
//!
//! This module defines the immutable view models computed from application
//! state. They are the "view description" half of the rendering design: the
//! projection (`AppState::compute_viewmodel`) is a pure function, and the
//! component renderers are a thin adapter that applies the description to the
//! terminal. View models contain no business logic, only display-ready data.

/// Complete view model for one frame.
///
/// At most one of `cards`/`empty_state`/`load_error` carries content for the
/// catalog area; `overlay` is drawn on top of whatever that area shows.
#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    /// Cards visible in the current window.
    pub cards: Vec<CardView>,

    /// Index of the selected card within `cards` (window-relative).
    pub selected_index: usize,

    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Rating buttons, sort buttons, and service checkboxes.
    pub filter_bar: FilterBarInfo,

    /// Search input state (when search mode is active).
    pub search_bar: Option<SearchBarInfo>,

    /// Placeholder shown instead of cards (loading, or no matches).
    pub empty_state: Option<EmptyState>,

    /// Inline load-failure message shown instead of cards.
    pub load_error: Option<LoadErrorInfo>,

    /// Detail overlay content (when visible).
    pub overlay: Option<OverlayView>,
}

/// Display information for a single listing card.
#[derive(Debug, Clone)]
pub struct CardView {
    /// Listing name, truncated to the card width budget.
    pub name: String,

    /// Formatted rating, e.g. `"★ 4.8"`.
    pub rating_label: String,

    /// Listing location text.
    pub location: String,

    /// Price text, verbatim from the catalog.
    pub price: String,

    /// Service badges in display order.
    pub badges: Vec<String>,

    /// Whether this card is currently selected.
    pub is_selected: bool,

    /// Character ranges of text-query matches within `name`.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Detail overlay content: every field of one listing.
#[derive(Debug, Clone)]
pub struct OverlayView {
    /// Listing name, shown in the panel border.
    pub title: String,

    /// Image reference (URL or path), shown as text.
    pub image: String,

    /// Formatted rating.
    pub rating_label: String,

    /// Listing location text.
    pub location: String,

    /// Price text, verbatim.
    pub price: String,

    /// Full description, wrapped by the renderer.
    pub description: String,

    /// Complete service list in display order.
    pub services: Vec<String>,
}

/// One rating or sort button.
#[derive(Debug, Clone)]
pub struct ButtonView {
    /// Button label.
    pub label: String,

    /// Whether this button is the active one in its group.
    pub active: bool,
}

/// One service checkbox control.
#[derive(Debug, Clone)]
pub struct ServiceBoxView {
    /// Service label.
    pub label: String,

    /// Whether the checkbox is checked.
    pub checked: bool,

    /// Digit key bound to the control, if it has one (first nine controls).
    /// Controls without a hotkey are still reachable by mouse click.
    pub hotkey: Option<char>,
}

/// Filter bar content.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Minimum-rating preset buttons; exactly one is active.
    pub rating_buttons: Vec<ButtonView>,

    /// Sort key buttons; exactly one is active.
    pub sort_buttons: Vec<ButtonView>,

    /// Service checkboxes, one per unique label in the catalog.
    pub services: Vec<ServiceBoxView>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Placeholder message for an empty catalog area.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No listings match the current criteria.").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Inline load-failure message.
#[derive(Debug, Clone)]
pub struct LoadErrorInfo {
    /// Complete user-facing message, already naming the source.
    pub message: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current text query.
    pub query: String,
}
