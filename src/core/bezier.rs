//! Bézier-Kurven beliebigen Grades über den de-Casteljau-Algorithmus.
//!
//! Keine Binomialkoeffizienten: jede Auswertung interpoliert die Kontrollpunkte
//! schrittweise linear, bis ein einziger Punkt übrig bleibt (O(N²) pro Auswertung).

use glam::Vec2;

/// Standard-Anzahl der Kurvensegmente pro Frame (ergibt 101 Stützpunkte).
pub const DEFAULT_CURVE_SEGMENTS: usize = 100;

/// Wertet die Bézier-Kurve durch `points` am Parameter `t` aus.
///
/// Gibt `None` zurück, wenn keine Kontrollpunkte vorhanden sind.
/// Bei genau einem Punkt ist das Ergebnis dieser Punkt für jedes `t`.
pub fn de_casteljau(points: &[Vec2], t: f32) -> Option<Vec2> {
    let mut scratch = Vec::with_capacity(points.len());
    evaluate_into(&mut scratch, points, t)
}

/// de Casteljau auf einer wiederverwendbaren Arbeitskopie.
fn evaluate_into(scratch: &mut Vec<Vec2>, points: &[Vec2], t: f32) -> Option<Vec2> {
    scratch.clear();
    scratch.extend_from_slice(points);

    let n = scratch.len().checked_sub(1)?;
    for k in 1..=n {
        for i in 0..=(n - k) {
            scratch[i] = (1.0 - t) * scratch[i] + t * scratch[i + 1];
        }
    }

    scratch.first().copied()
}

/// Tastet Bézier-Kurven ab, ohne pro Stützpunkt neu zu allokieren.
#[derive(Debug, Default)]
pub struct CurveSampler {
    /// Arbeitskopie der Kontrollpunkte für de Casteljau
    scratch: Vec<Vec2>,
}

impl CurveSampler {
    /// Erstellt einen Sampler mit leerem Scratch-Buffer.
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }

    /// Wertet die Kurve an `t` aus (siehe [`de_casteljau`]).
    pub fn eval(&mut self, points: &[Vec2], t: f32) -> Option<Vec2> {
        evaluate_into(&mut self.scratch, points, t)
    }

    /// Schreibt `segments + 1` Stützpunkte bei `t = i / segments` nach `out`.
    ///
    /// Unter zwei Kontrollpunkten wird keine Kurve erzeugt: `out` bleibt leer.
    pub fn sample_into(&mut self, points: &[Vec2], segments: usize, out: &mut Vec<Vec2>) {
        out.clear();
        if points.len() < 2 || segments == 0 {
            return;
        }

        out.reserve(segments + 1);
        for i in 0..=segments {
            let t = i as f32 / segments as f32;
            if let Some(p) = self.eval(points, t) {
                out.push(p);
            }
        }
    }
}

/// Tastet die Kurve an `segments + 1` gleichverteilten Parametern ab.
///
/// Liefert eine leere Polyline, wenn weniger als zwei Kontrollpunkte existieren.
pub fn sample_curve(points: &[Vec2], segments: usize) -> Vec<Vec2> {
    let mut out = Vec::new();
    CurveSampler::new().sample_into(points, segments, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic() -> Vec<Vec2> {
        vec![
            Vec2::new(-0.8, -0.5),
            Vec2::new(-0.3, 0.7),
            Vec2::new(0.4, -0.6),
            Vec2::new(0.9, 0.2),
        ]
    }

    #[test]
    fn endpoints_are_first_and_last_control_point() {
        let points = cubic();
        let start = de_casteljau(&points, 0.0).expect("Kurve vorhanden");
        let end = de_casteljau(&points, 1.0).expect("Kurve vorhanden");
        assert_eq!(start, points[0]);
        assert_eq!(end, points[3]);
    }

    #[test]
    fn two_points_reduce_to_linear_interpolation() {
        let p0 = Vec2::new(-0.5, 0.25);
        let p1 = Vec2::new(0.75, -0.5);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let p = de_casteljau(&[p0, p1], t).expect("Kurve vorhanden");
            let expected = (1.0 - t) * p0 + t * p1;
            assert_relative_eq!(p.x, expected.x, epsilon = 1e-6);
            assert_relative_eq!(p.y, expected.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn collinear_control_points_stay_on_the_line() {
        let points = [
            Vec2::new(-1.0, -0.5),
            Vec2::new(0.0, 0.0),
            Vec2::new(0.6, 0.3),
        ];
        for p in sample_curve(&points, 20) {
            // Gerade y = 0.5 x
            assert_relative_eq!(p.y, 0.5 * p.x, epsilon = 1e-5);
        }
    }

    #[test]
    fn palindromic_sequence_is_symmetric_in_t() {
        let points = [
            Vec2::new(-0.5, 0.1),
            Vec2::new(0.2, 0.8),
            Vec2::new(-0.5, 0.1),
        ];
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let a = de_casteljau(&points, t).expect("Kurve vorhanden");
            let b = de_casteljau(&points, 1.0 - t).expect("Kurve vorhanden");
            assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn matches_closed_form_cubic() {
        let points = cubic();
        let t = 0.3f32;
        let inv = 1.0 - t;
        let expected = inv * inv * inv * points[0]
            + 3.0 * inv * inv * t * points[1]
            + 3.0 * inv * t * t * points[2]
            + t * t * t * points[3];
        let p = de_casteljau(&points, t).expect("Kurve vorhanden");
        assert_relative_eq!(p.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(p.y, expected.y, epsilon = 1e-5);
    }

    #[test]
    fn single_point_is_returned_for_every_t() {
        let p = Vec2::new(0.3, -0.2);
        assert_eq!(de_casteljau(&[p], 0.0), Some(p));
        assert_eq!(de_casteljau(&[p], 0.7), Some(p));
        assert_eq!(de_casteljau(&[], 0.5), None);
    }

    #[test]
    fn sampling_produces_segments_plus_one_points() {
        let samples = sample_curve(&cubic(), DEFAULT_CURVE_SEGMENTS);
        assert_eq!(samples.len(), DEFAULT_CURVE_SEGMENTS + 1);
        assert_eq!(samples[0], cubic()[0]);
        assert_eq!(*samples.last().expect("nicht leer"), cubic()[3]);
    }

    #[test]
    fn sampling_below_two_points_is_a_no_op() {
        assert!(sample_curve(&[], 100).is_empty());
        assert!(sample_curve(&[Vec2::ZERO], 100).is_empty());
    }

    #[test]
    fn sampler_reuses_output_buffer() {
        let mut sampler = CurveSampler::new();
        let mut out = vec![Vec2::splat(9.0); 3];
        sampler.sample_into(&cubic(), 4, &mut out);
        assert_eq!(out.len(), 5);
        sampler.sample_into(&cubic()[..1], 4, &mut out);
        assert!(out.is_empty());
    }
}
