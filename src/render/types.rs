//! Rendering-Typen: Vertex-Layout und Topologie-Abbildung.

use crate::shared::{DrawBatch, Primitive};
use bytemuck::{Pod, Zeroable};

/// Vertex mit Position in NDC und RGBA-Farbe.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FlatVertex {
    /// Position in NDC
    pub position: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl FlatVertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<FlatVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// GPU-Topologie, auf die ein Batch abgebildet wird.
///
/// wgpu kennt keine Triangle-Fans, diese werden als Dreiecksliste gezeichnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Topology {
    LineStrip,
    LineList,
    TriangleList,
}

impl Topology {
    pub(crate) const ALL: [Topology; 3] = [
        Topology::LineStrip,
        Topology::LineList,
        Topology::TriangleList,
    ];

    pub(crate) fn of(primitive: Primitive) -> Self {
        match primitive {
            Primitive::LineStrip => Topology::LineStrip,
            Primitive::LineList => Topology::LineList,
            Primitive::TriangleFan => Topology::TriangleList,
        }
    }

    pub(crate) fn to_wgpu(self) -> eframe::wgpu::PrimitiveTopology {
        match self {
            Topology::LineStrip => eframe::wgpu::PrimitiveTopology::LineStrip,
            Topology::LineList => eframe::wgpu::PrimitiveTopology::LineList,
            Topology::TriangleList => eframe::wgpu::PrimitiveTopology::TriangleList,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Topology::LineStrip => "Flat LineStrip Pipeline",
            Topology::LineList => "Flat LineList Pipeline",
            Topology::TriangleList => "Flat TriangleList Pipeline",
        }
    }
}

/// Zusammenhängender Vertex-Bereich eines Batches im gemeinsamen Buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DrawRange {
    pub topology: Topology,
    pub vertices: std::ops::Range<u32>,
}

/// Zerlegt einen Triangle-Fan (Zentrum + Rand) in eine Dreiecksliste.
pub(crate) fn fan_to_triangle_list<T: Copy>(fan: &[T]) -> Vec<T> {
    let Some((&center, rim)) = fan.split_first() else {
        return Vec::new();
    };
    rim.windows(2)
        .flat_map(|pair| [center, pair[0], pair[1]])
        .collect()
}

/// Hängt die Vertices eines Batches an und liefert den belegten Bereich.
///
/// Batches mit zu wenigen Vertices für ihre Topologie liefern `None`.
pub(crate) fn append_batch(out: &mut Vec<FlatVertex>, batch: &DrawBatch) -> Option<DrawRange> {
    let [r, g, b] = batch.color;
    let color = [r, g, b, 1.0];
    let topology = Topology::of(batch.primitive);
    let start = out.len();

    match batch.primitive {
        Primitive::LineStrip => {
            if batch.vertices.len() < 2 {
                return None;
            }
            out.extend(
                batch
                    .vertices
                    .iter()
                    .map(|v| FlatVertex::new(v.to_array(), color)),
            );
        }
        Primitive::LineList => {
            let pairs = batch.vertices.len() / 2 * 2;
            out.extend(
                batch.vertices[..pairs]
                    .iter()
                    .map(|v| FlatVertex::new(v.to_array(), color)),
            );
        }
        Primitive::TriangleFan => {
            out.extend(
                fan_to_triangle_list(&batch.vertices)
                    .into_iter()
                    .map(|v| FlatVertex::new(v.to_array(), color)),
            );
        }
    }

    let end = out.len();
    (end > start).then(|| DrawRange {
        topology,
        vertices: start as u32..end as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn fan_becomes_triangle_list() {
        let fan = [0, 1, 2, 3, 4];
        assert_eq!(
            fan_to_triangle_list(&fan),
            vec![0, 1, 2, 0, 2, 3, 0, 3, 4]
        );
    }

    #[test]
    fn fan_without_rim_is_empty() {
        assert!(fan_to_triangle_list(&[7]).is_empty());
        assert!(fan_to_triangle_list::<i32>(&[]).is_empty());
    }

    #[test]
    fn batches_share_one_buffer_in_order() {
        let mut out = Vec::new();
        let strip = DrawBatch::new(
            Primitive::LineStrip,
            vec![Vec2::ZERO, Vec2::X, Vec2::Y],
            [1.0, 1.0, 1.0],
        );
        let fan = DrawBatch::new(
            Primitive::TriangleFan,
            vec![Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::NEG_X],
            [1.0, 0.0, 0.0],
        );

        let a = append_batch(&mut out, &strip).expect("Strip gültig");
        let b = append_batch(&mut out, &fan).expect("Fan gültig");

        assert_eq!(a.vertices, 0..3);
        assert_eq!(a.topology, Topology::LineStrip);
        assert_eq!(b.vertices, 3..9);
        assert_eq!(b.topology, Topology::TriangleList);
        assert_eq!(out[3].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn degenerate_batches_are_skipped() {
        let mut out = Vec::new();
        let strip = DrawBatch::new(Primitive::LineStrip, vec![Vec2::ZERO], [1.0; 3]);
        let list = DrawBatch::new(Primitive::LineList, vec![Vec2::ZERO], [1.0; 3]);
        assert!(append_batch(&mut out, &strip).is_none());
        assert!(append_batch(&mut out, &list).is_none());
        assert!(out.is_empty());
    }
}
