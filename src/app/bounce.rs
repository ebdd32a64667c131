//! Laufzeit-Zustand der Kreis/Linie-Demo mit festem Simulationstakt.

use crate::core::{circle_fan, BounceScene, LineInput};
use crate::shared::{BounceOptions, DrawBatch, Primitive, RenderScene};
use glam::Vec2;

/// Demo-Zustand: Szene plus Zeitakkumulator.
///
/// Die Simulation läuft mit `tick_rate_hz` Schritten pro Sekunde, unabhängig
/// von der Bildwiederholrate. Pro Frame werden höchstens `max_ticks_per_frame`
/// Schritte nachgeholt; der Rest wird verworfen.
pub struct BounceState {
    pub scene: BounceScene,
    pub options: BounceOptions,
    /// Noch nicht simulierte Zeit in Sekunden
    accumulator: f32,
    /// Signal zum Beenden der Anwendung
    pub should_exit: bool,
}

impl BounceState {
    pub fn new(options: BounceOptions) -> Self {
        Self {
            scene: BounceScene::new(options.params()),
            options,
            accumulator: 0.0,
            should_exit: false,
        }
    }

    /// Schreibt `dt` Sekunden gut und führt die fälligen Schritte aus.
    ///
    /// Gibt die Anzahl ausgeführter Schritte zurück.
    pub fn advance(&mut self, dt: f32, input: LineInput) -> u32 {
        let interval = self.options.tick_interval();
        self.accumulator += dt.max(0.0);

        let mut ticks = 0;
        while self.accumulator >= interval {
            if ticks >= self.options.max_ticks_per_frame {
                log::debug!(
                    "Simulation hinkt hinterher, verwerfe {:.3}s",
                    self.accumulator
                );
                self.accumulator = 0.0;
                break;
            }
            self.scene.tick(input);
            self.accumulator -= interval;
            ticks += 1;
        }

        ticks
    }

    pub fn request_exit(&mut self) {
        log::info!("Beenden angefordert");
        self.should_exit = true;
    }

    /// Kreis (Farbe je nach Schnitt-Flag) und Linie, in dieser Reihenfolge.
    pub fn build_render_scene(&self) -> RenderScene {
        let options = &self.options;
        let scene = &self.scene;
        let color = if scene.intersecting {
            options.circle_highlight_color
        } else {
            options.circle_color
        };

        let mut render = RenderScene::new();
        render.push(DrawBatch::new(
            Primitive::TriangleFan,
            circle_fan(
                Vec2::new(scene.circle_x, 0.0),
                scene.params().radius,
                options.circle_segments,
            ),
            color,
        ));

        let hw = scene.params().segment_half_width;
        render.push(DrawBatch::new(
            Primitive::LineList,
            vec![Vec2::new(-hw, scene.line_y), Vec2::new(hw, scene.line_y)],
            options.line_color,
        ));
        render
    }
}

impl Default for BounceState {
    fn default() -> Self {
        Self::new(BounceOptions::default())
    }
}
