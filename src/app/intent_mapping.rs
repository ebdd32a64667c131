//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, InteractionMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Der Pick-Test entscheidet, welche Commands entstehen
/// (Drag beginnen vs. Punkt anhängen, Löschen vs. nichts).
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PrimaryPressed { pos } => {
            let mut commands = Vec::with_capacity(2);

            // Release verpasst (z.B. außerhalb des Fensters losgelassen): alten Drag zuerst beenden
            if state.interaction != InteractionMode::Idle {
                commands.push(AppCommand::EndDrag);
            }

            match state.control_points.pick(pos, state.pick_radius()) {
                Some(index) => commands.push(AppCommand::BeginDrag { index }),
                None => commands.push(AppCommand::AddControlPoint { pos }),
            }
            commands
        }
        AppIntent::PrimaryReleased => match state.interaction {
            InteractionMode::Dragging { .. } => vec![AppCommand::EndDrag],
            InteractionMode::Idle => Vec::new(),
        },
        AppIntent::PointerMoved { pos } => match state.interaction {
            InteractionMode::Dragging { .. } => vec![AppCommand::MoveDraggedPoint { pos }],
            InteractionMode::Idle => Vec::new(),
        },
        AppIntent::SecondaryPressed { pos } => state
            .control_points
            .pick(pos, state.pick_radius())
            .map(|index| vec![AppCommand::RemoveControlPoint { index }])
            .unwrap_or_default(),
        AppIntent::PointSizeIncreaseRequested => {
            vec![AppCommand::AdjustPointDiameter { delta: 1 }]
        }
        AppIntent::PointSizeDecreaseRequested => {
            vec![AppCommand::AdjustPointDiameter { delta: -1 }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
