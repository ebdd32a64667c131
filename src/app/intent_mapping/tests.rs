use super::*;
use crate::core::ControlPolygon;
use glam::Vec2;

fn state_with_points(points: &[Vec2]) -> AppState {
    let mut state = AppState::new();
    state.control_points = ControlPolygon::from_positions(points.iter().copied());
    state
}

#[test]
fn primary_press_on_empty_area_adds_point() {
    let state = state_with_points(&[Vec2::new(0.5, 0.5)]);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryPressed {
            pos: Vec2::new(-0.5, -0.5),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::AddControlPoint {
            pos: Vec2::new(-0.5, -0.5)
        }]
    );
}

#[test]
fn primary_press_on_point_begins_drag() {
    let state = state_with_points(&[Vec2::new(-0.2, 0.0), Vec2::new(0.5, 0.5)]);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PrimaryPressed {
            pos: Vec2::new(0.5, 0.5),
        },
    );
    assert_eq!(commands, vec![AppCommand::BeginDrag { index: 1 }]);
}

#[test]
fn primary_press_while_dragging_ends_previous_drag_first() {
    let mut state = state_with_points(&[Vec2::ZERO]);
    state.interaction = InteractionMode::Dragging { index: 0 };
    let commands = map_intent_to_commands(&state, AppIntent::PrimaryPressed { pos: Vec2::ZERO });
    assert_eq!(
        commands,
        vec![AppCommand::EndDrag, AppCommand::BeginDrag { index: 0 }]
    );
}

#[test]
fn pointer_move_is_ignored_while_idle() {
    let state = state_with_points(&[Vec2::ZERO]);
    let commands = map_intent_to_commands(&state, AppIntent::PointerMoved { pos: Vec2::ONE });
    assert!(commands.is_empty());
}

#[test]
fn pointer_move_while_dragging_moves_point() {
    let mut state = state_with_points(&[Vec2::ZERO]);
    state.interaction = InteractionMode::Dragging { index: 0 };
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: Vec2::new(0.1, 0.2),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::MoveDraggedPoint {
            pos: Vec2::new(0.1, 0.2)
        }]
    );
}

#[test]
fn release_while_idle_is_a_no_op() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::PrimaryReleased).is_empty());
}

#[test]
fn secondary_press_removes_only_first_hit() {
    let state = state_with_points(&[Vec2::ZERO, Vec2::new(0.001, 0.0)]);
    let commands = map_intent_to_commands(&state, AppIntent::SecondaryPressed { pos: Vec2::ZERO });
    assert_eq!(commands, vec![AppCommand::RemoveControlPoint { index: 0 }]);
}

#[test]
fn secondary_press_on_empty_area_does_nothing() {
    let state = state_with_points(&[Vec2::ZERO]);
    let commands = map_intent_to_commands(
        &state,
        AppIntent::SecondaryPressed {
            pos: Vec2::new(0.9, 0.9),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn pick_radius_grows_with_point_diameter() {
    // 0.009 NDC entfernt: Radius bei d=5 ist 0.00625, bei d=9 ist 0.01125
    let mut state = state_with_points(&[Vec2::ZERO]);
    let pos = Vec2::new(0.009, 0.0);

    let small = map_intent_to_commands(&state, AppIntent::PrimaryPressed { pos });
    assert_eq!(small, vec![AppCommand::AddControlPoint { pos }]);

    state.point_diameter = 9;
    let large = map_intent_to_commands(&state, AppIntent::PrimaryPressed { pos });
    assert_eq!(large, vec![AppCommand::BeginDrag { index: 0 }]);
}
