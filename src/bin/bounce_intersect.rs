//! Kreis/Linie-Schnitt.
//!
//! Ein Kreis pendelt horizontal, eine Linie wird mit den Pfeiltasten
//! verschoben. Schneiden sich beide, wird der Kreis rot gezeichnet.

use eframe::egui;
use eframe::egui_wgpu;
use std::sync::{Arc, Mutex};
use grafika_demos::shared::options::BOUNCE_WINDOW_SIZE;
use grafika_demos::{render, ui, BounceState, DemoOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Kreis/Linie-Demo v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([BOUNCE_WINDOW_SIZE, BOUNCE_WINDOW_SIZE])
                .with_title("Kör és Vonal"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Kör és Vonal",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(BounceApp::new(render_state)))
            }),
        )
    }
}

struct BounceApp {
    state: BounceState,
    renderer: Arc<Mutex<render::Renderer>>,
}

impl BounceApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let options = DemoOptions::load_from_file(&DemoOptions::config_path());

        Self {
            state: BounceState::new(options.bounce),
            renderer: render::Renderer::shared(render_state),
        }
    }
}

impl eframe::App for BounceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let keys = ui::read_line_input(ctx);
        if keys.exit {
            self.state.request_exit();
        }

        let dt = ctx.input(|i| i.stable_dt);
        self.state.advance(dt, keys.line);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

                render::SceneCallback::paint_into(
                    ui,
                    rect,
                    &self.renderer,
                    self.state.build_render_scene(),
                );
            });

        // Animation läuft ohne Eingabe weiter
        ctx.request_repaint();
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b] = self.state.options.clear_color;
        [r, g, b, 1.0]
    }
}
