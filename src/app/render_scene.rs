//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{circle_fan, sample_curve};
use crate::shared::{DrawBatch, Primitive, RenderScene};

/// Baut die Editor-Szene: Kurve, Kontrollpolygon, Kontrollpunkte (in dieser Reihenfolge).
pub fn build(state: &AppState) -> RenderScene {
    let options = &state.options;
    let positions = state.control_points.positions();
    let mut scene = RenderScene::new();

    if positions.len() >= 2 {
        scene.push(DrawBatch::new(
            Primitive::LineStrip,
            sample_curve(&positions, options.curve_segments),
            options.curve_color,
        ));
        scene.push(DrawBatch::new(
            Primitive::LineStrip,
            positions.clone(),
            options.polygon_color,
        ));
    }

    let radius = state.pick_radius();
    for &pos in &positions {
        scene.push(DrawBatch::new(
            Primitive::TriangleFan,
            circle_fan(pos, radius, options.point_circle_segments),
            options.point_color,
        ));
    }

    scene
}
