//! egui-Paint-Callback: Upload in `prepare`, Zeichnen in `paint`.

use super::Renderer;
use crate::shared::RenderScene;
use eframe::{egui_wgpu, wgpu};
use std::sync::{Arc, Mutex};

/// Zeichnet eine Szene über den geteilten Renderer in den Callback-Bereich.
pub struct SceneCallback {
    pub renderer: Arc<Mutex<Renderer>>,
    pub scene: RenderScene,
}

impl SceneCallback {
    /// Fügt einen Paint-Callback für `scene` über `rect` in den Painter ein.
    ///
    /// NDC [-1, 1] deckt genau `rect` ab.
    pub fn paint_into(
        ui: &egui::Ui,
        rect: egui::Rect,
        renderer: &Arc<Mutex<Renderer>>,
        scene: RenderScene,
    ) {
        let callback = egui_wgpu::Callback::new_paint_callback(
            rect,
            Self {
                renderer: Arc::clone(renderer),
                scene,
            },
        );
        ui.painter().add(callback);
    }
}

impl egui_wgpu::CallbackTrait for SceneCallback {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        match self.renderer.lock() {
            Ok(mut renderer) => renderer.prepare_scene(device, queue, &self.scene),
            Err(_) => log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)"),
        }
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &egui_wgpu::CallbackResources,
    ) {
        match self.renderer.lock() {
            Ok(renderer) => renderer.paint(render_pass),
            Err(_) => log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)"),
        }
    }
}
