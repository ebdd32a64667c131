//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, InteractionMode};

/// Rendert die Status-Bar des Editors
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Kontrollpunkte: {}", state.point_count()));

            ui.separator();

            ui.label(format!(
                "Punktgröße: {} ({}–{})",
                state.point_diameter,
                state.options.point_diameter_min,
                state.options.point_diameter_max
            ));

            ui.separator();

            let mode = match state.interaction {
                InteractionMode::Idle => "Bereit".to_string(),
                InteractionMode::Dragging { index } => format!("Ziehe Punkt {}", index),
            };
            ui.label(mode);

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
