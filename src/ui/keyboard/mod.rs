//! Keyboard-Shortcuts beider Demos.
//!
//! Editor: Pfeil hoch/runter ändert die Punktgröße (inkl. Tastenwiederholung),
//! Escape beendet. Kreis/Linie: gehaltene Pfeiltasten bewegen die Linie.

use crate::app::AppIntent;
use crate::core::LineInput;

/// Verarbeitet Editor-Shortcuts und gibt AppIntents zurück.
///
/// Jeder Druck und jede Wiederholung ergibt einen eigenen Intent.
pub fn collect_editor_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::ArrowUp => Some(AppIntent::PointSizeIncreaseRequested),
                    egui::Key::ArrowDown => Some(AppIntent::PointSizeDecreaseRequested),
                    egui::Key::Escape => Some(AppIntent::ExitRequested),
                    _ => None,
                },
                _ => None,
            })
            .collect()
    })
}

/// Tastenzustand der Kreis/Linie-Demo in einem Frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineKeys {
    pub line: LineInput,
    pub exit: bool,
}

/// Liest gehaltene Pfeiltasten und Escape für die Kreis/Linie-Demo.
pub fn read_line_input(ctx: &egui::Context) -> LineKeys {
    ctx.input(|i| LineKeys {
        line: LineInput {
            move_up: i.key_down(egui::Key::ArrowUp),
            move_down: i.key_down(egui::Key::ArrowDown),
        },
        exit: i.key_pressed(egui::Key::Escape),
    })
}
