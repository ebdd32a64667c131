//! Geordnete Kontrollpunkt-Folge des Bézier-Editors.

use glam::Vec2;

/// Ein Kontrollpunkt in normalisierten Gerätekoordinaten (NDC, ca. [-1, 1]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in NDC
    pub position: Vec2,
    /// Wird gerade gezogen
    pub selected: bool,
}

impl ControlPoint {
    /// Erstellt einen nicht selektierten Kontrollpunkt.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            selected: false,
        }
    }
}

/// Kontrollpolygon: Einfügereihenfolge = Reihenfolge der Bézier-Stützpunkte.
#[derive(Debug, Clone, Default)]
pub struct ControlPolygon {
    points: Vec<ControlPoint>,
}

impl ControlPolygon {
    /// Erstellt ein leeres Kontrollpolygon.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Baut ein Polygon aus Positionen (alle Punkte unselektiert).
    pub fn from_positions(positions: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            points: positions.into_iter().map(ControlPoint::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Positionen in Kurvenreihenfolge (für Auswertung und Rendering).
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Hängt einen neuen, unselektierten Punkt an und gibt seinen Index zurück.
    pub fn push(&mut self, position: Vec2) -> usize {
        self.points.push(ControlPoint::new(position));
        self.points.len() - 1
    }

    /// Entfernt den Punkt an `index`; nachfolgende Indizes rücken um eins auf.
    pub fn remove(&mut self, index: usize) -> Option<ControlPoint> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Überschreibt die Position eines Punkts. `false` bei ungültigem Index.
    pub fn set_position(&mut self, index: usize, position: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.position = position;
                true
            }
            None => false,
        }
    }

    /// Setzt das Selektions-Flag eines Punkts. `false` bei ungültigem Index.
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Index des aktuell selektierten Punkts (höchstens einer).
    pub fn selected_index(&self) -> Option<usize> {
        self.points.iter().position(|p| p.selected)
    }

    /// Hit-Test: erster Punkt (niedrigster Index), dessen Abstand echt kleiner als `radius` ist.
    pub fn pick(&self, position: Vec2, radius: f32) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.position.distance(position) < radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_points() -> ControlPolygon {
        ControlPolygon::from_positions([
            Vec2::new(-0.5, 0.0),
            Vec2::new(0.0, 0.5),
            Vec2::new(0.5, 0.0),
        ])
    }

    #[test]
    fn pick_at_exact_position_hits() {
        let polygon = three_points();
        assert_eq!(polygon.pick(Vec2::new(0.0, 0.5), 0.001), Some(1));
    }

    #[test]
    fn pick_outside_radius_misses() {
        let polygon = three_points();
        assert_eq!(polygon.pick(Vec2::new(0.0, -0.9), 0.1), None);
    }

    #[test]
    fn pick_radius_is_exclusive() {
        let polygon = ControlPolygon::from_positions([Vec2::ZERO]);
        assert_eq!(polygon.pick(Vec2::new(0.25, 0.0), 0.25), None);
        assert_eq!(polygon.pick(Vec2::new(0.2, 0.0), 0.25), Some(0));
    }

    #[test]
    fn pick_prefers_lowest_index_on_overlap() {
        let polygon = ControlPolygon::from_positions([
            Vec2::new(0.01, 0.0),
            Vec2::new(0.0, 0.0),
        ]);
        assert_eq!(polygon.pick(Vec2::ZERO, 0.05), Some(0));
    }

    #[test]
    fn remove_shifts_following_points_down() {
        let mut polygon = three_points();
        let removed = polygon.remove(0).expect("Punkt vorhanden");
        assert_eq!(removed.position, Vec2::new(-0.5, 0.0));
        assert_eq!(polygon.len(), 2);
        assert_eq!(polygon.points()[0].position, Vec2::new(0.0, 0.5));
        assert_eq!(polygon.points()[1].position, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut polygon = three_points();
        assert!(polygon.remove(3).is_none());
        assert_eq!(polygon.len(), 3);
    }

    #[test]
    fn push_appends_unselected_point() {
        let mut polygon = ControlPolygon::new();
        let index = polygon.push(Vec2::new(0.1, 0.2));
        assert_eq!(index, 0);
        assert!(!polygon.points()[0].selected);
        assert_eq!(polygon.selected_index(), None);
    }
}
