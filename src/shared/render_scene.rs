//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use glam::Vec2;

/// Primitiv-Topologie eines Draw-Batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Zusammenhängende Polyline
    LineStrip,
    /// Unabhängige Liniensegmente (Paare)
    LineList,
    /// Gefülltes Polygon: erster Vertex ist das Zentrum
    TriangleFan,
}

/// Ein Zeichenaufruf: Vertices in NDC mit einheitlicher Farbe.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub primitive: Primitive,
    pub vertices: Vec<Vec2>,
    /// RGB-Farbe
    pub color: [f32; 3],
}

impl DrawBatch {
    pub fn new(primitive: Primitive, vertices: Vec<Vec2>, color: [f32; 3]) -> Self {
        Self {
            primitive,
            vertices,
            color,
        }
    }
}

/// Read-only Daten für einen Render-Frame, in Zeichenreihenfolge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    pub batches: Vec<DrawBatch>,
}

impl RenderScene {
    pub fn new() -> Self {
        Self {
            batches: Vec::new(),
        }
    }

    /// Fügt einen Batch hinzu; leere Vertex-Listen werden verworfen.
    pub fn push(&mut self, batch: DrawBatch) {
        if !batch.vertices.is_empty() {
            self.batches.push(batch);
        }
    }

    /// Gesamtzahl der Vertices aller Batches.
    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
