//! Geometrie-Hilfen: Kreis-Fächer und Bildschirm → NDC.

use glam::Vec2;
use std::f32::consts::TAU;

/// Punkte eines Kreisrands (`segments + 1` Punkte, erster = letzter).
pub fn circle_rim(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            center + radius * Vec2::from_angle(angle)
        })
        .collect()
}

/// Triangle-Fan eines gefüllten Kreises: Mittelpunkt, dann der geschlossene Rand.
pub fn circle_fan(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    let mut fan = Vec::with_capacity(segments.max(3) + 2);
    fan.push(center);
    fan.extend(circle_rim(center, radius, segments));
    fan
}

/// Rechnet eine Viewport-lokale Pixelposition in NDC um.
///
/// Pixel-Y zeigt nach unten, NDC-Y nach oben.
pub fn screen_to_ndc(local_px: Vec2, viewport_size: Vec2) -> Vec2 {
    let size = viewport_size.max(Vec2::ONE);
    Vec2::new(
        local_px.x / size.x * 2.0 - 1.0,
        1.0 - local_px.y / size.y * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn screen_corners_map_to_ndc_corners() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(screen_to_ndc(Vec2::ZERO, size), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(size, size), Vec2::new(1.0, -1.0));
        assert_eq!(
            screen_to_ndc(Vec2::new(400.0, 300.0), size),
            Vec2::new(0.0, 0.0)
        );
    }

    #[test]
    fn fan_has_center_and_closed_rim() {
        let fan = circle_fan(Vec2::new(0.5, 0.0), 0.1, 100);
        assert_eq!(fan.len(), 102);
        assert_eq!(fan[0], Vec2::new(0.5, 0.0));
        assert_relative_eq!(fan[1].x, fan[101].x, epsilon = 1e-5);
        assert_relative_eq!(fan[1].y, fan[101].y, epsilon = 1e-5);
        for p in &fan[1..] {
            assert_relative_eq!(p.distance(fan[0]), 0.1, epsilon = 1e-5);
        }
    }
}
