//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled terminal output
//! through a declarative two-step model:
//!
//! ```text
//! AppState → compute_viewmodel → CatalogViewModel → render → ANSI output
//! ```
//!
//! The view model is a pure projection; the components are a thin adapter
//! that repaints the whole frame from it on every render.
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable component renderers
//! - [`layout`]: frame geometry shared with mouse hit-testing
//! - [`helpers`]: shared rendering utilities (highlighting, wrapping)
//! - [`theme`]: color schemes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ButtonView, CardView, CatalogViewModel, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo,
    LoadErrorInfo, OverlayView, SearchBarInfo, ServiceBoxView,
};
