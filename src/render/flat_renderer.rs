//! Renderer für einfarbige Linien und gefüllte Kreise in NDC.

use super::types::{append_batch, DrawRange, FlatVertex, Topology};
use crate::shared::RenderScene;
use eframe::{egui_wgpu, wgpu};

/// Zeichnet alle Batches einer Szene aus einem gemeinsamen Vertex-Buffer.
pub struct FlatRenderer {
    /// Eine Pipeline pro Topologie, Reihenfolge wie `Topology::ALL`
    pipelines: Vec<(Topology, wgpu::RenderPipeline)>,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    /// Wiederverwendeter CPU-Buffer
    vertices: Vec<FlatVertex>,
    ranges: Vec<DrawRange>,
}

impl FlatRenderer {
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Flat Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipelines = Topology::ALL
            .iter()
            .map(|&topology| {
                let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                    label: Some(topology.label()),
                    layout: Some(&pipeline_layout),
                    vertex: wgpu::VertexState {
                        module: shader,
                        entry_point: Some("vs_main"),
                        buffers: &[FlatVertex::desc()],
                        compilation_options: Default::default(),
                    },
                    fragment: Some(wgpu::FragmentState {
                        module: shader,
                        entry_point: Some("fs_main"),
                        targets: &[Some(wgpu::ColorTargetState {
                            format: render_state.target_format,
                            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                            write_mask: wgpu::ColorWrites::ALL,
                        })],
                        compilation_options: Default::default(),
                    }),
                    primitive: wgpu::PrimitiveState {
                        topology: topology.to_wgpu(),
                        strip_index_format: None,
                        front_face: wgpu::FrontFace::Ccw,
                        cull_mode: None,
                        unclipped_depth: false,
                        polygon_mode: wgpu::PolygonMode::Fill,
                        conservative: false,
                    },
                    depth_stencil: None,
                    multisample: wgpu::MultisampleState {
                        count: 4,
                        mask: !0,
                        alpha_to_coverage_enabled: false,
                    },
                    multiview: None,
                    cache: None,
                });
                (topology, pipeline)
            })
            .collect();

        Self {
            pipelines,
            vertex_buffer: None,
            vertex_capacity: 0,
            vertices: Vec::new(),
            ranges: Vec::new(),
        }
    }

    /// Packt die Batches in den CPU-Buffer und lädt ihn hoch.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, scene: &RenderScene) {
        self.vertices.clear();
        self.ranges.clear();
        for batch in &scene.batches {
            if let Some(range) = append_batch(&mut self.vertices, batch) {
                self.ranges.push(range);
            }
        }

        if self.vertices.is_empty() {
            return;
        }

        if self.vertex_buffer.is_none() || self.vertices.len() > self.vertex_capacity {
            // Kapazität verdoppeln, damit wachsende Kurven nicht jeden Frame neu allokieren
            let capacity = self.vertices.len().next_power_of_two();
            let vertex_size = std::mem::size_of::<FlatVertex>() as u64;
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Flat Vertex Buffer"),
                size: capacity as u64 * vertex_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = capacity;
            log::debug!("Flat-Vertex-Buffer neu angelegt: {} Vertices", capacity);
        }

        if let Some(vertex_buffer) = &self.vertex_buffer {
            queue.write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&self.vertices));
        }
    }

    /// Zeichnet die vorbereiteten Bereiche; Pipeline-Wechsel nur bei neuer Topologie.
    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        if self.ranges.is_empty() {
            return;
        }
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            log::error!("FlatRenderer: missing vertex buffer before draw call");
            return;
        };

        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        let mut bound: Option<Topology> = None;
        for range in &self.ranges {
            if bound != Some(range.topology) {
                let Some((_, pipeline)) = self.pipelines.iter().find(|(t, _)| *t == range.topology)
                else {
                    continue;
                };
                render_pass.set_pipeline(pipeline);
                bound = Some(range.topology);
            }
            render_pass.draw(range.vertices.clone(), 0..1);
        }
    }
}
