//! Handler für Kontrollpunkt-Operationen (Anhängen, Löschen, Ziehen).

use crate::app::use_cases;
use crate::app::AppState;

/// Hängt einen Kontrollpunkt an.
pub fn add_point(state: &mut AppState, pos: glam::Vec2) {
    use_cases::control_points::add_control_point(state, pos);
}

/// Entfernt einen Kontrollpunkt.
pub fn remove_point(state: &mut AppState, index: usize) {
    use_cases::control_points::remove_control_point(state, index);
}

/// Startet einen Drag.
pub fn begin_drag(state: &mut AppState, index: usize) {
    use_cases::drag::begin_drag(state, index);
}

/// Aktualisiert die Position des gezogenen Punkts.
pub fn move_dragged(state: &mut AppState, pos: glam::Vec2) {
    use_cases::drag::move_dragged_point(state, pos);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}
