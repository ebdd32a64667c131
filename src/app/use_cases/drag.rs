//! Use-Case: Kontrollpunkt ziehen (Begin → Move → End).

use crate::app::{AppState, InteractionMode};

/// Startet den Drag des Punkts an `index` und markiert ihn als selektiert.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if !state.control_points.set_selected(index, true) {
        log::warn!("Drag-Start auf ungültigen Punkt {} ignoriert", index);
        return;
    }
    state.interaction = InteractionMode::Dragging { index };
    log::debug!("Drag gestartet: Punkt {}", index);
}

/// Setzt den gezogenen Punkt auf die Zeigerposition. Ohne aktiven Drag: No-op.
pub fn move_dragged_point(state: &mut AppState, pos: glam::Vec2) {
    let Some(index) = state.interaction.dragged_index() else {
        return;
    };
    if !state.control_points.set_position(index, pos) {
        log::warn!("Gezogener Punkt {} existiert nicht mehr, Drag beendet", index);
        state.interaction = InteractionMode::Idle;
    }
}

/// Beendet den Drag und hebt die Selektion auf.
pub fn end_drag(state: &mut AppState) {
    if let Some(index) = state.interaction.dragged_index() {
        state.control_points.set_selected(index, false);
        log::debug!("Drag beendet: Punkt {}", index);
    }
    state.interaction = InteractionMode::Idle;
}
