//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Signalisiert der Frame-Schleife, das Fenster zu schließen.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
