//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kontrollpunkte ===
            AppCommand::AddControlPoint { pos } => handlers::editing::add_point(state, pos),
            AppCommand::RemoveControlPoint { index } => {
                handlers::editing::remove_point(state, index)
            }

            // === Drag ===
            AppCommand::BeginDrag { index } => handlers::editing::begin_drag(state, index),
            AppCommand::MoveDraggedPoint { pos } => handlers::editing::move_dragged(state, pos),
            AppCommand::EndDrag => handlers::editing::end_drag(state),

            // === Darstellung ===
            AppCommand::AdjustPointDiameter { delta } => {
                handlers::view::adjust_point_diameter(state, delta)
            }

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
