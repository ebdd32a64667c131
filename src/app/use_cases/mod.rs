//! Use-Cases der Application-Layer-Orchestrierung.

pub mod control_points;
pub mod drag;
pub mod point_size;
