//! Grafik-Demos Library: Bézier-Editor und Kreis/Linie-Schnitt.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, BounceState, InteractionMode};
pub use crate::core::{de_casteljau, sample_curve, BounceScene, ControlPolygon, CurveSampler, LineInput};
pub use shared::{BounceOptions, DemoOptions, EditorOptions, RenderScene};
