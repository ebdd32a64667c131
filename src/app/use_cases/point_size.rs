//! Use-Case: Punktdurchmesser ändern.

use crate::app::AppState;

/// Ändert den Durchmesser um `delta`, geklemmt auf den Optionsbereich.
///
/// Darstellung und Pick-Radius leiten sich beide aus dem Durchmesser ab.
pub fn adjust_point_diameter(state: &mut AppState, delta: i32) {
    let requested = i64::from(state.point_diameter) + i64::from(delta);
    let clamped = state.options.clamp_diameter(requested);
    if clamped != state.point_diameter {
        log::debug!("Punktdurchmesser: {} -> {}", state.point_diameter, clamped);
        state.point_diameter = clamped;
    }
}
