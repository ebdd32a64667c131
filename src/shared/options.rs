//! Zentrale Konfiguration für beide Demos.
//!
//! `DemoOptions` enthält alle zur Laufzeit änderbaren Werte und wird als
//! `grafika_demos.toml` neben der Binary gespeichert.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{BounceParams, DEFAULT_CURVE_SEGMENTS};
use serde::{Deserialize, Serialize};

// ── Bézier-Editor ──────────────────────────────────────────────────

/// Start-Durchmesser der Kontrollpunkte.
pub const POINT_DIAMETER_DEFAULT: u32 = 5;
/// Kleinster einstellbarer Durchmesser.
pub const POINT_DIAMETER_MIN: u32 = 3;
/// Größter einstellbarer Durchmesser.
pub const POINT_DIAMETER_MAX: u32 = 9;
/// Durchmesser / Teiler = Radius in NDC (Darstellung und Hitbox).
pub const POINT_RADIUS_DIVISOR: f32 = 800.0;
/// Segmente eines gezeichneten Kontrollpunkt-Kreises.
pub const POINT_CIRCLE_SEGMENTS: usize = 32;
/// Farbe der Kontrollpunkte (RGB: Rot).
pub const POINT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
/// Farbe des Kontrollpolygons (RGB: Grau).
pub const POLYGON_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
/// Farbe der Kurve (RGB: Weiß).
pub const CURVE_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
/// Hintergrund des Editors (RGB: Schwarz).
pub const EDITOR_CLEAR_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

// ── Kreis/Linie ─────────────────────────────────────────────────────

/// Fenstergröße der Kreis/Linie-Demo in Pixeln.
pub const BOUNCE_WINDOW_SIZE: f32 = 600.0;
/// Kreisradius: 50 px bei 600 px Fensterbreite.
pub const CIRCLE_RADIUS: f32 = 50.0 / (BOUNCE_WINDOW_SIZE / 2.0);
/// Halbe Breite des Liniensegments.
pub const SEGMENT_HALF_WIDTH: f32 = 0.33;
/// Kreisgeschwindigkeit pro Simulationsschritt.
pub const CIRCLE_SPEED: f32 = 0.004;
/// Linienverschiebung pro Simulationsschritt.
pub const LINE_STEP: f32 = 0.004;
/// Simulationsschritte pro Sekunde.
pub const TICK_RATE_HZ: f32 = 240.0;
/// Obergrenze für nachgeholte Schritte pro Frame.
pub const MAX_TICKS_PER_FRAME: u32 = 64;
/// Segmente des Kreis-Fächers.
pub const CIRCLE_SEGMENTS: usize = 100;
/// Kreisfarbe ohne Schnitt (RGB: Blau).
pub const CIRCLE_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
/// Kreisfarbe bei Schnitt mit der Linie (RGB: Rot).
pub const CIRCLE_HIGHLIGHT_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
/// Linienfarbe (RGB: Schwarz).
pub const LINE_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
/// Hintergrund der Kreis/Linie-Demo (RGB: Gelb).
pub const BOUNCE_CLEAR_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Optionen des Bézier-Editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Durchmesser der Kontrollpunkte beim Start
    pub point_diameter_default: u32,
    /// Untergrenze für Punktgröße-Befehle
    pub point_diameter_min: u32,
    /// Obergrenze für Punktgröße-Befehle
    pub point_diameter_max: u32,
    /// Teiler Durchmesser → NDC-Radius
    pub point_radius_divisor: f32,
    /// Kurvensegmente pro Frame
    pub curve_segments: usize,
    /// Segmente pro Kontrollpunkt-Kreis
    pub point_circle_segments: usize,
    pub point_color: [f32; 3],
    pub polygon_color: [f32; 3],
    pub curve_color: [f32; 3],
    pub clear_color: [f32; 3],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_diameter_default: POINT_DIAMETER_DEFAULT,
            point_diameter_min: POINT_DIAMETER_MIN,
            point_diameter_max: POINT_DIAMETER_MAX,
            point_radius_divisor: POINT_RADIUS_DIVISOR,
            curve_segments: DEFAULT_CURVE_SEGMENTS,
            point_circle_segments: POINT_CIRCLE_SEGMENTS,
            point_color: POINT_COLOR,
            polygon_color: POLYGON_COLOR,
            curve_color: CURVE_COLOR,
            clear_color: EDITOR_CLEAR_COLOR,
        }
    }
}

impl EditorOptions {
    /// Radius in NDC für einen Punktdurchmesser.
    ///
    /// Gilt für Darstellung und Hit-Test gleichermaßen: größere Punkte sind leichter zu greifen.
    pub fn pick_radius(&self, diameter: u32) -> f32 {
        diameter as f32 / self.point_radius_divisor.max(f32::EPSILON)
    }

    /// Klemmt einen Durchmesser in den erlaubten Bereich.
    pub fn clamp_diameter(&self, diameter: i64) -> u32 {
        let min = self.point_diameter_min.min(self.point_diameter_max);
        let max = self.point_diameter_max.max(min);
        diameter.clamp(i64::from(min), i64::from(max)) as u32
    }
}

/// Optionen der Kreis/Linie-Demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceOptions {
    pub circle_radius: f32,
    pub segment_half_width: f32,
    /// Kreisgeschwindigkeit pro Schritt (Betrag)
    pub circle_speed: f32,
    /// Linienverschiebung pro Schritt
    pub line_step: f32,
    /// Simulationsschritte pro Sekunde
    pub tick_rate_hz: f32,
    /// Maximal nachgeholte Schritte pro Frame
    pub max_ticks_per_frame: u32,
    pub circle_segments: usize,
    pub circle_color: [f32; 3],
    pub circle_highlight_color: [f32; 3],
    pub line_color: [f32; 3],
    pub clear_color: [f32; 3],
}

impl Default for BounceOptions {
    fn default() -> Self {
        Self {
            circle_radius: CIRCLE_RADIUS,
            segment_half_width: SEGMENT_HALF_WIDTH,
            circle_speed: CIRCLE_SPEED,
            line_step: LINE_STEP,
            tick_rate_hz: TICK_RATE_HZ,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
            circle_segments: CIRCLE_SEGMENTS,
            circle_color: CIRCLE_COLOR,
            circle_highlight_color: CIRCLE_HIGHLIGHT_COLOR,
            line_color: LINE_COLOR,
            clear_color: BOUNCE_CLEAR_COLOR,
        }
    }
}

impl BounceOptions {
    /// Szenen-Parameter für den Simulationskern.
    pub fn params(&self) -> BounceParams {
        BounceParams {
            radius: self.circle_radius,
            segment_half_width: self.segment_half_width,
            circle_speed: self.circle_speed,
            line_step: self.line_step,
        }
    }

    /// Dauer eines Simulationsschritts in Sekunden.
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_rate_hz.max(1.0)
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Optionen beider Demos, eine TOML-Datei mit `[editor]` und `[bounce]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoOptions {
    pub editor: EditorOptions,
    pub bounce: BounceOptions,
}

impl DemoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("grafika_demos"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("grafika_demos.toml")
    }
}
