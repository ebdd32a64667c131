//! UI-Layer mit egui: Viewport-Input, Keyboard-Shortcuts und Status-Bar.

pub mod input;
pub mod keyboard;
pub mod status;

pub use input::InputState;
pub use keyboard::{collect_editor_keyboard_intents, read_line_input, LineKeys};
pub use status::render_status_bar;
