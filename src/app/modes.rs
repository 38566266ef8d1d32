//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control how keyboard
//! input is interpreted. The browser operates in one of two primary input
//! modes:
//!
//! - **Normal**: navigation and filter commands
//! - **Search**: live text-query editing, with typing or result-navigation
//!   focus
//!
//! The detail overlay is not a mode of its own: it is a two-state visibility
//! toggle tracked by `AppState`, and while it is visible only its close
//! actions are interpreted.

/// Focus state within search mode.
///
/// Determines whether keystrokes edit the query or navigate the filtered
/// results. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement, enter to open details, and / to return to
    /// Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), enter (details),
    /// 1-9 (toggle service), r (rating presets), o/v/p/n (sort), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results.
    Search(SearchFocus),
}
