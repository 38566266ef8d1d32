//! Vitrine: a terminal catalog browser for local business listings.
//!
//! Vitrine loads a static catalog of listings once, then lets the user
//! filter it by free text, minimum rating, and offered services, sort the
//! results by rating, price, or name, and inspect a single listing in a
//! modal detail overlay. There is no server side and no persistence: the
//! whole catalog lives in memory for the session.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← crossterm loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Pipeline reruns                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - File source │   │ - Async load  │
//! │ - Theming     │   │ - HTTP source │   │ - mpsc bridge │
//! │ - Components  │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Listing model + filter pipeline (domain/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The filter/sort pipeline ([`domain::pipeline`]) is a pure function over an
//! explicit criteria object; the UI is a pure state-to-viewmodel projection
//! plus a thin ANSI adapter; and every control is wired through one explicit
//! event dispatch table ([`app::handler`]).
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`): parse CLI arguments, initialize tracing,
//!    create `AppState` with the resolved theme, enter the terminal.
//! 2. **Load**: spawn the catalog worker and post `LoadCatalog`; the UI shows
//!    a loading placeholder until the response arrives. A failed load is
//!    terminal for the session and rendered as an inline message.
//! 3. **Interact**: keyboard and mouse events become [`app::Event`]s; the
//!    handler mutates state, reruns the pipeline, and the frame is repainted.
//!
//! # Example
//!
//! ```
//! use vitrine::app::{handle_event, Event};
//! use vitrine::{initialize, Config};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), vitrine::VitrineError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{FilterCriteria, Listing, Result, SortKey, VitrineError};
pub use ui::Theme;

/// Runtime configuration, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog source: a filesystem path or an `http(s)://` URL.
    pub source: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Log level for the diagnostic file (`trace` … `error`). Default `info`.
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "listings.json".to_string(),
            theme_name: None,
            theme_file: None,
            log_level: None,
        }
    }
}

/// Creates the initial application state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then the
/// default) and returns an `AppState` in the loading phase, ready for the
/// worker's catalog response. Theme failures degrade to the default theme
/// with a log line rather than aborting startup.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(source = %config.source, "initializing vitrine");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.source.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: initialization starts in the loading phase with the identity filter
    #[test]
    fn initialize_starts_loading() {
        let state = initialize(&Config::default());
        assert_eq!(state.load_phase, app::LoadPhase::Loading);
        assert!(state.listings.is_empty());
        assert!(state.criteria.query.is_empty());
        assert_eq!(state.source_label, "listings.json");
    }

    /// What: an unknown theme name degrades to the default theme
    #[test]
    fn unknown_theme_falls_back() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
