//! Use-Case: Kontrollpunkte anhängen und entfernen.

use crate::app::{AppState, InteractionMode};

/// Hängt einen neuen, unselektierten Kontrollpunkt am Ende der Folge an.
pub fn add_control_point(state: &mut AppState, pos: glam::Vec2) {
    let index = state.control_points.push(pos);
    log::info!(
        "Kontrollpunkt {} hinzugefügt bei ({:.3}, {:.3})",
        index,
        pos.x,
        pos.y
    );
}

/// Entfernt den Kontrollpunkt an `index`.
///
/// Ein laufender Drag wird nachgeführt: liegt der entfernte Punkt vor dem
/// gezogenen, rückt der Drag-Index um eins auf; wird der gezogene Punkt selbst
/// entfernt, endet der Drag.
pub fn remove_control_point(state: &mut AppState, index: usize) {
    if state.control_points.remove(index).is_none() {
        log::warn!("Kontrollpunkt {} existiert nicht, nichts entfernt", index);
        return;
    }
    log::info!(
        "Kontrollpunkt {} entfernt ({} verbleibend)",
        index,
        state.control_points.len()
    );

    if let InteractionMode::Dragging { index: dragged } = state.interaction {
        state.interaction = if dragged == index {
            log::debug!("Gezogener Punkt entfernt, Drag beendet");
            InteractionMode::Idle
        } else if dragged > index {
            log::debug!("Drag-Index nachgeführt: {} -> {}", dragged, dragged - 1);
            InteractionMode::Dragging {
                index: dragged - 1,
            }
        } else {
            state.interaction
        };
    }
}
