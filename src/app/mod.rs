//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal shim (`main.rs`) and the
//! domain/catalog/worker layers. It implements the event-driven architecture
//! that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Pipeline Rerun
//!                           ↑                                   ↓
//!                           └──── Worker Responses      View Model → Render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::{AppState, LoadPhase, ServiceFilter, RATING_PRESETS};
