//! Viewport-Input-Handling: rohe Maus-Events → AppIntent in NDC.

use crate::app::AppIntent;
use crate::core::screen_to_ndc;
use glam::Vec2;

/// Dekodiert Maus-Events des Viewports.
///
/// Tastendrücke zählen nur innerhalb des Viewports, Loslassen und Bewegung
/// überall, damit ein Drag über den Rand hinaus weiterläuft.
#[derive(Default)]
pub struct InputState {
    /// Letzte bekannte Zeigerposition in NDC
    last_pointer_ndc: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Letzte dekodierte Zeigerposition in NDC.
    pub fn last_pointer_ndc(&self) -> Option<Vec2> {
        self.last_pointer_ndc
    }

    /// Sammelt Viewport-Events aus dem egui-Input dieses Frames.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        ui.input(|i| self.decode_events(&i.events, rect))
    }

    /// Übersetzt rohe egui-Events relativ zu `rect` in Intents.
    pub fn decode_events(&mut self, events: &[egui::Event], rect: egui::Rect) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        let size = Vec2::new(rect.width(), rect.height());
        if size.x <= 0.0 || size.y <= 0.0 {
            return intents;
        }
        let to_ndc = |pos: egui::Pos2| {
            let local = pos - rect.min;
            screen_to_ndc(Vec2::new(local.x, local.y), size)
        };

        for event in events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    let ndc = to_ndc(*pos);
                    self.last_pointer_ndc = Some(ndc);
                    intents.push(AppIntent::PointerMoved { pos: ndc });
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    ..
                } => {
                    let ndc = to_ndc(*pos);
                    let inside = rect.contains(*pos);
                    match (button, pressed) {
                        (egui::PointerButton::Primary, true) if inside => {
                            intents.push(AppIntent::PrimaryPressed { pos: ndc });
                        }
                        (egui::PointerButton::Primary, false) => {
                            intents.push(AppIntent::PrimaryReleased);
                        }
                        (egui::PointerButton::Secondary, true) if inside => {
                            intents.push(AppIntent::SecondaryPressed { pos: ndc });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 20.0), egui::vec2(800.0, 600.0))
    }

    fn button(x: f32, y: f32, button: egui::PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button,
            pressed,
            modifiers: egui::Modifiers::default(),
        }
    }

    #[test]
    fn primary_press_is_converted_to_ndc() {
        let mut input = InputState::new();
        let intents = input.decode_events(
            &[button(400.0, 320.0, egui::PointerButton::Primary, true)],
            viewport(),
        );
        assert_eq!(intents, vec![AppIntent::PrimaryPressed { pos: Vec2::ZERO }]);
    }

    #[test]
    fn top_left_corner_maps_to_minus_one_plus_one() {
        let mut input = InputState::new();
        let intents = input.decode_events(
            &[button(0.0, 20.0, egui::PointerButton::Secondary, true)],
            viewport(),
        );
        assert_eq!(
            intents,
            vec![AppIntent::SecondaryPressed {
                pos: Vec2::new(-1.0, 1.0)
            }]
        );
    }

    #[test]
    fn press_outside_viewport_is_ignored_but_release_is_not() {
        let mut input = InputState::new();
        let intents = input.decode_events(
            &[
                button(400.0, 5.0, egui::PointerButton::Primary, true),
                button(400.0, 5.0, egui::PointerButton::Primary, false),
            ],
            viewport(),
        );
        assert_eq!(intents, vec![AppIntent::PrimaryReleased]);
    }

    #[test]
    fn pointer_motion_updates_last_position() {
        let mut input = InputState::new();
        let intents = input.decode_events(
            &[egui::Event::PointerMoved(egui::pos2(800.0, 620.0))],
            viewport(),
        );
        assert_eq!(
            intents,
            vec![AppIntent::PointerMoved {
                pos: Vec2::new(1.0, -1.0)
            }]
        );
        assert_eq!(input.last_pointer_ndc(), Some(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn middle_button_is_ignored() {
        let mut input = InputState::new();
        let intents = input.decode_events(
            &[button(400.0, 320.0, egui::PointerButton::Middle, true)],
            viewport(),
        );
        assert!(intents.is_empty());
    }
}
