//! Core-Domain: Bézier-Auswertung, Kontrollpunkte, Kreis/Linie-Szene und Geometrie.

pub mod bezier;
pub mod bounce;
pub mod control_points;
pub mod geometry;

pub use bezier::{de_casteljau, sample_curve, CurveSampler, DEFAULT_CURVE_SEGMENTS};
pub use bounce::{is_intersecting, BounceParams, BounceScene, LineInput};
pub use control_points::{ControlPoint, ControlPolygon};
pub use geometry::{circle_fan, circle_rim, screen_to_ndc};
