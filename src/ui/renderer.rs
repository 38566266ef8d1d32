//! Top-level rendering coordinator.
//!
//! The main rendering entry point: compute the view model, clear the screen,
//! delegate to the component renderers, and flush. Mode handling (search bar,
//! empty states, load failure, overlay) happens here so the components stay
//! single-purpose.

use std::io::Write;

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CatalogViewModel;

/// Renders one frame to stdout.
///
/// Computes the view model from application state and repaints the whole
/// frame; there is no incremental update. The overlay, when visible, is drawn
/// last so it sits on top of the card area.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);

    let _ = std::io::stdout().flush();
}

/// Renders a computed view model.
fn render_viewmodel(vm: &CatalogViewModel, theme: &Theme, rows: usize, cols: usize) {
    crate::ui::helpers::clear_screen();

    components::render_frame(vm, theme, rows, cols);

    if let Some(overlay) = &vm.overlay {
        components::render_overlay(overlay, theme, rows, cols);
    }
}
