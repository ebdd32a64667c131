//! GPU-Rendering mit wgpu.

mod callback;
mod flat_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::SceneCallback;
pub(crate) use flat_renderer::FlatRenderer;
pub use types::FlatVertex;

use eframe::egui_wgpu;
use std::sync::{Arc, Mutex};

/// Haupt-Renderer beider Demos.
///
/// Verwaltet GPU-Buffer und Pipelines selbst. Pro Frame: `prepare_scene()`
/// lädt die Szene hoch, `paint()` zeichnet sie in den Callback-Viewport.
pub struct Renderer {
    flat_renderer: FlatRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Flat Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            flat_renderer: FlatRenderer::new(render_state, &shader),
        }
    }

    /// Erstellt den Renderer geteilt für Paint-Callbacks.
    pub fn shared(render_state: &egui_wgpu::RenderState) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(Self::new(render_state)))
    }

    /// Lädt die Szene in den Vertex-Buffer.
    pub fn prepare_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        scene: &RenderScene,
    ) {
        log::debug!(
            "Renderer.prepare_scene(): {} Batches, {} Vertices",
            scene.batches.len(),
            scene.vertex_count()
        );
        self.flat_renderer.prepare(device, queue, scene);
    }

    /// Zeichnet die zuletzt vorbereitete Szene in Batch-Reihenfolge.
    pub fn paint(&self, render_pass: &mut eframe::wgpu::RenderPass<'static>) {
        self.flat_renderer.paint(render_pass);
    }
}
