//! Kreis/Linie-Szene: horizontal pendelnder Kreis und verschiebbare Linie.
//!
//! Alle Größen in NDC. Der Schnitt-Test ist ein achsparalleler Intervalltest,
//! da die Linie immer horizontal und um x = 0 zentriert ist.

/// Fensterkante in NDC.
const VIEWPORT_EDGE: f32 = 1.0;

/// Parameter der Szene (aus den Optionen übernommen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceParams {
    /// Kreisradius
    pub radius: f32,
    /// Halbe Breite des Liniensegments um x = 0
    pub segment_half_width: f32,
    /// Betrag der Kreisgeschwindigkeit pro Tick
    pub circle_speed: f32,
    /// Linienverschiebung pro Tick und gedrückter Taste
    pub line_step: f32,
}

/// Tastenzustand der beiden Richtungsbefehle in einem Tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineInput {
    pub move_up: bool,
    pub move_down: bool,
}

/// Zustand des Kreises, der Linie und des abgeleiteten Schnitt-Flags.
#[derive(Debug, Clone)]
pub struct BounceScene {
    /// Horizontale Position des Kreismittelpunkts
    pub circle_x: f32,
    /// Vorzeichenbehaftete Geschwindigkeit pro Tick
    pub speed: f32,
    /// Vertikale Position der Linie
    pub line_y: f32,
    /// Ergebnis des letzten Schnitt-Tests
    pub intersecting: bool,
    params: BounceParams,
}

impl BounceScene {
    /// Startzustand: Kreis und Linie zentriert, Bewegung nach rechts.
    pub fn new(params: BounceParams) -> Self {
        let mut scene = Self {
            circle_x: 0.0,
            speed: params.circle_speed.abs(),
            line_y: 0.0,
            intersecting: false,
            params,
        };
        scene.refresh_intersection();
        scene
    }

    pub fn params(&self) -> &BounceParams {
        &self.params
    }

    /// Ein Simulationsschritt: Linie bewegen, Kreis bewegen und abprallen, Schnitt neu bestimmen.
    pub fn tick(&mut self, input: LineInput) {
        // Beide Tasten wirken unabhängig und heben sich gegenseitig auf
        if input.move_up {
            self.line_y += self.params.line_step;
        }
        if input.move_down {
            self.line_y -= self.params.line_step;
        }

        self.advance_circle();
        self.refresh_intersection();
    }

    /// Bewegt den Kreis um `speed` und kehrt die Richtung an der Fensterkante um.
    fn advance_circle(&mut self) {
        self.circle_x += self.speed;

        let r = self.params.radius;
        let hits_right = self.circle_x + r >= VIEWPORT_EDGE && self.speed > 0.0;
        let hits_left = self.circle_x - r <= -VIEWPORT_EDGE && self.speed < 0.0;
        if hits_right || hits_left {
            self.speed = -self.speed;
        }
    }

    fn refresh_intersection(&mut self) {
        self.intersecting = is_intersecting(
            self.circle_x,
            self.line_y,
            self.params.radius,
            self.params.segment_half_width,
        );
    }
}

/// Schneidet das Liniensegment den Kreis? (Intervall-Überlappung auf beiden Achsen)
pub fn is_intersecting(circle_x: f32, line_y: f32, radius: f32, segment_half_width: f32) -> bool {
    line_y.abs() <= radius
        && circle_x + radius >= -segment_half_width
        && circle_x - radius <= segment_half_width
}
