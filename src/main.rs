//! Terminal shim and entry point.
//!
//! This is the thin integration layer between the vitrine library and the
//! terminal: argument parsing, tracing setup, raw-mode lifecycle, and the
//! event loop that translates crossterm input into library events and
//! executes the resulting actions. Everything stateful lives in the library
//! layer; this file only maps and dispatches.
//!
//! # Event Mapping
//!
//! Terminal events are translated to library events:
//!
//! - `Key(Down)` / `Key('j')` → `Event::KeyDown`
//! - `Key(Enter)` → `Event::OpenSelected` (or `FocusResults` while typing)
//! - `Key(Esc)` → `Event::Escape` / `Event::ExitSearch`
//! - `Key('1'..='9')` → `Event::ToggleService`
//! - `Key('r')` → `Event::CycleRating`
//! - `Key('o'|'v'|'p'|'n')` → `Event::SetSort`
//! - `Mouse(Down)` → `Event::Click` with 1-indexed coordinates
//!
//! The catalog worker's responses are drained from its channel between input
//! polls and dispatched as `Event::WorkerResponse`.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyCode, KeyEvent,
    KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use vitrine::app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
use vitrine::domain::SortKey;
use vitrine::worker::{self, WorkerMessage, WorkerResponse};
use vitrine::{Config, VitrineError};

/// How long one input poll waits before the worker channel is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Vitrine - a terminal catalog browser for local business listings
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Browse, filter, and sort a catalog of local business listings", long_about = None)]
struct Args {
    /// Catalog source: a JSON file path or an http(s):// URL
    #[arg(default_value = "listings.json")]
    source: String,

    /// Built-in theme name (catppuccin-mocha, catppuccin-latte)
    #[arg(long)]
    theme: Option<String>,

    /// Path to a custom TOML theme file (takes precedence over --theme)
    #[arg(long)]
    theme_file: Option<String>,

    /// Log level for the diagnostic file (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            source: self.source,
            theme_name: self.theme,
            theme_file: self.theme_file,
            log_level: self.log_level,
        }
    }
}

fn main() {
    let config = Args::parse().into_config();

    let _log_guard = vitrine::observability::init_tracing(&config);
    tracing::info!(source = %config.source, "vitrine starting");

    let mut state = vitrine::initialize(&config);

    if let Err(e) = run(&mut state, &config) {
        let _ = restore_terminal();
        tracing::error!(error = %e, "application error");
        eprintln!("vitrine: {e}");
        std::process::exit(1);
    }

    tracing::info!("vitrine exited");
}

/// Runs the application: terminal lifecycle, worker spawn, event loop.
fn run(state: &mut AppState, config: &Config) -> vitrine::Result<()> {
    let backend = vitrine::catalog::open(&config.source);
    let (request_tx, response_rx) = worker::spawn(backend);
    request_tx
        .send(WorkerMessage::LoadCatalog)
        .map_err(|e| VitrineError::Worker(e.to_string()))?;

    setup_terminal()?;

    // Raw mode survives panics unless someone restores it.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    let result = event_loop(state, &response_rx);

    restore_terminal()?;
    result
}

/// The cooperative, single-threaded event loop.
///
/// One iteration drains pending worker responses, repaints if anything
/// changed, then polls the terminal for the next input event. Each event is
/// handled to completion before the next is read.
fn event_loop(state: &mut AppState, responses: &Receiver<WorkerResponse>) -> vitrine::Result<()> {
    let mut dirty = true;

    loop {
        while let Ok(response) = responses.try_recv() {
            if dispatch(state, &Event::WorkerResponse(response), &mut dirty)? {
                return Ok(());
            }
        }

        if dirty {
            let (cols, rows) = crossterm::terminal::size()
                .map_err(|e| VitrineError::Terminal(e.to_string()))?;
            vitrine::ui::render(state, rows as usize, cols as usize);
            dirty = false;
        }

        if event::poll(POLL_INTERVAL).map_err(|e| VitrineError::Terminal(e.to_string()))? {
            let terminal_event =
                event::read().map_err(|e| VitrineError::Terminal(e.to_string()))?;

            let mapped = match terminal_event {
                CEvent::Key(ref key) if key.kind == KeyEventKind::Press => {
                    map_key_event(state, key)
                }
                CEvent::Mouse(mouse) => map_mouse_event(&mouse),
                CEvent::Resize(..) => {
                    dirty = true;
                    None
                }
                _ => None,
            };

            if let Some(event) = mapped {
                if dispatch(state, &event, &mut dirty)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Handles one event and executes its actions. Returns `true` on quit.
fn dispatch(state: &mut AppState, event: &Event, dirty: &mut bool) -> vitrine::Result<bool> {
    let (should_render, actions) = handle_event(state, event)?;
    *dirty |= should_render;

    for action in actions {
        match action {
            Action::Quit => {
                tracing::debug!("quit action received");
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Maps a keyboard event to a library event, depending on current state.
///
/// While the detail overlay is visible only its close keys are interpreted,
/// matching the two-state overlay contract.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    if state.overlay.is_some() {
        return match key.code {
            KeyCode::Esc => Some(Event::Escape),
            KeyCode::Char('q') => Some(Event::CloseOverlay),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(Event::KeyDown),
            KeyCode::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    match state.input_mode {
        InputMode::Normal => map_normal_key(key.code),
        InputMode::Search(SearchFocus::Typing) => map_search_typing_key(key.code),
        InputMode::Search(SearchFocus::Navigating) => map_search_navigating_key(key.code),
    }
}

/// Normal mode: navigation, filters, sorting, search entry.
fn map_normal_key(code: KeyCode) -> Option<Event> {
    Some(match code {
        KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
        KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
        KeyCode::Enter => Event::OpenSelected,
        KeyCode::Char('/') => Event::SearchMode,
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Char('r') => Event::CycleRating,
        KeyCode::Char('o') => Event::SetSort(SortKey::Original),
        KeyCode::Char('v') => Event::SetSort(SortKey::RatingDesc),
        KeyCode::Char('p') => Event::SetSort(SortKey::PriceAsc),
        KeyCode::Char('n') => Event::SetSort(SortKey::NameAsc),
        KeyCode::Char(c @ '1'..='9') => {
            Event::ToggleService(c as usize - '1' as usize)
        }
        KeyCode::Esc => Event::Escape,
        _ => return None,
    })
}

/// Search mode with the input focused: everything printable edits the query.
fn map_search_typing_key(code: KeyCode) -> Option<Event> {
    Some(match code {
        KeyCode::Esc => Event::ExitSearch,
        KeyCode::Enter => Event::FocusResults,
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Down => Event::KeyDown,
        KeyCode::Up => Event::KeyUp,
        KeyCode::Char(c) => Event::Char(c),
        _ => return None,
    })
}

/// Search mode with the results focused: navigate and open, `/` edits again.
fn map_search_navigating_key(code: KeyCode) -> Option<Event> {
    Some(match code {
        KeyCode::Esc => Event::ExitSearch,
        KeyCode::Enter => Event::OpenSelected,
        KeyCode::Char('/') => Event::FocusSearchBar,
        KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
        KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
        KeyCode::Char(c @ '1'..='9') => {
            Event::ToggleService(c as usize - '1' as usize)
        }
        _ => return None,
    })
}

/// Maps a left-button press to a click event with 1-indexed coordinates.
fn map_mouse_event(mouse: &MouseEvent) -> Option<Event> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let (cols, rows) = crossterm::terminal::size().ok()?;
    Some(Event::Click {
        row: mouse.row as usize + 1,
        col: mouse.column as usize + 1,
        rows: rows as usize,
        cols: cols as usize,
    })
}

/// Enters raw mode, the alternate screen, and mouse capture.
fn setup_terminal() -> vitrine::Result<()> {
    enable_raw_mode().map_err(|e| VitrineError::Terminal(e.to_string()))?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| VitrineError::Terminal(e.to_string()))?;
    Ok(())
}

/// Leaves mouse capture, the alternate screen, and raw mode.
fn restore_terminal() -> vitrine::Result<()> {
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)
        .map_err(|e| VitrineError::Terminal(e.to_string()))?;
    disable_raw_mode().map_err(|e| VitrineError::Terminal(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine::Theme;

    fn state() -> AppState {
        AppState::new(Theme::default(), "listings.json".to_string())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// What: normal mode maps the documented filter and sort keys
    #[test]
    fn normal_mode_key_table() {
        let state = state();
        assert_eq!(map_key_event(&state, &key(KeyCode::Char('j'))), Some(Event::KeyDown));
        assert_eq!(map_key_event(&state, &key(KeyCode::Char('r'))), Some(Event::CycleRating));
        assert_eq!(
            map_key_event(&state, &key(KeyCode::Char('p'))),
            Some(Event::SetSort(SortKey::PriceAsc))
        );
        assert_eq!(map_key_event(&state, &key(KeyCode::Char('3'))), Some(Event::ToggleService(2)));
        assert_eq!(map_key_event(&state, &key(KeyCode::Char('q'))), Some(Event::Quit));
    }

    /// What: typing focus turns letters into query characters, not commands
    #[test]
    fn search_typing_captures_characters() {
        let mut state = state();
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        assert_eq!(map_key_event(&state, &key(KeyCode::Char('q'))), Some(Event::Char('q')));
        assert_eq!(map_key_event(&state, &key(KeyCode::Char('1'))), Some(Event::Char('1')));
        assert_eq!(map_key_event(&state, &key(KeyCode::Enter)), Some(Event::FocusResults));
    }

    /// What: while the overlay is visible only its close keys are mapped
    #[test]
    fn overlay_swallows_other_keys() {
        let mut state = state();
        state.listings.push(vitrine::Listing::new(1, "A", "B", "R$ 1,00", 5.0));
        state.open_overlay(1);

        assert_eq!(map_key_event(&state, &key(KeyCode::Esc)), Some(Event::Escape));
        assert_eq!(map_key_event(&state, &key(KeyCode::Char('q'))), Some(Event::CloseOverlay));
        assert_eq!(map_key_event(&state, &key(KeyCode::Char('j'))), None);
        assert_eq!(map_key_event(&state, &key(KeyCode::Enter)), None);
    }
}
