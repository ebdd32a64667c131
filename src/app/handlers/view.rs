//! Handler für Darstellungsparameter.

use crate::app::use_cases;
use crate::app::AppState;

/// Ändert den Punktdurchmesser (geklemmt).
pub fn adjust_point_diameter(state: &mut AppState, delta: i32) {
    use_cases::point_size::adjust_point_diameter(state, delta);
}
