//! Application State: zentrale Datenhaltung des Bézier-Editors.

use super::CommandLog;
use crate::core::ControlPolygon;
use crate::shared::EditorOptions;

/// Interaktionszustand der Kontrollpunkt-Bearbeitung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Kein Punkt wird gezogen
    #[default]
    Idle,
    /// Kontrollpunkt `index` folgt dem Mauszeiger
    Dragging { index: usize },
}

impl InteractionMode {
    /// Index des gezogenen Punkts, falls ein Drag aktiv ist.
    pub fn dragged_index(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { index } => Some(index),
        }
    }
}

/// Haupt-Anwendungszustand des Editors
pub struct AppState {
    /// Kontrollpunkte in Kurvenreihenfolge
    pub control_points: ControlPolygon,
    /// Aktueller Drag-Zustand
    pub interaction: InteractionMode,
    /// Durchmesser der Kontrollpunkte (bestimmt Darstellung und Pick-Radius)
    pub point_diameter: u32,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
    /// Signal zum Beenden der Anwendung
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren Editor mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Editor mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let point_diameter = options.clamp_diameter(i64::from(options.point_diameter_default));
        Self {
            control_points: ControlPolygon::new(),
            interaction: InteractionMode::Idle,
            point_diameter,
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Pick-Radius in NDC für den aktuellen Punktdurchmesser.
    pub fn pick_radius(&self) -> f32 {
        self.options.pick_radius(self.point_diameter)
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück.
    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
