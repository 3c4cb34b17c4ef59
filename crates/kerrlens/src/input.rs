//! Input handler: pointer, scroll and key events mapped onto the parameter
//! store with clamped linear rules.

use renderer::{InputEvent, InputKey, KeyAction, LoopControl, PointerButton};

use crate::params::ViewerState;

/// Inclination change per pixel of vertical drag.
pub const DRAG_DEGREES_PER_PIXEL: f32 = 0.2;
/// Camera distance change per wheel line.
pub const SCROLL_DISTANCE_PER_LINE: f32 = 0.5;
/// Camera distance change per W/S press or repeat.
pub const KEY_DISTANCE_STEP: f32 = 0.5;

/// Dispatches one event to the matching handler.
pub fn handle(state: &mut ViewerState, event: InputEvent) -> LoopControl {
    match event {
        InputEvent::PointerPressed { button, x, y } => on_pointer_press(state, button, x, y),
        InputEvent::PointerReleased { button } => on_pointer_release(state, button),
        InputEvent::PointerMoved { x, y } => on_pointer_move(state, x, y),
        InputEvent::Scroll { y_offset } => on_scroll(state, y_offset),
        InputEvent::Key { key, action } => return on_key(state, key, action),
    }
    LoopControl::Continue
}

pub fn on_pointer_press(state: &mut ViewerState, button: PointerButton, x: f64, y: f64) {
    if button != PointerButton::Primary {
        return;
    }
    state.camera.is_dragging = true;
    state.camera.last_cursor_x = x;
    state.camera.last_cursor_y = y;
}

pub fn on_pointer_release(state: &mut ViewerState, button: PointerButton) {
    if button == PointerButton::Primary {
        state.camera.is_dragging = false;
    }
}

/// Drag is relative to the previous sample, not the press anchor.
pub fn on_pointer_move(state: &mut ViewerState, x: f64, y: f64) {
    if state.camera.is_dragging {
        let dy = (y - state.camera.last_cursor_y) as f32;
        let inclination = state.params.inclination_deg() + dy * DRAG_DEGREES_PER_PIXEL;
        state.params.set_inclination_deg(inclination);
    }
    state.camera.last_cursor_x = x;
    state.camera.last_cursor_y = y;
}

pub fn on_scroll(state: &mut ViewerState, y_offset: f64) {
    let distance = state.params.camera_distance() - y_offset as f32 * SCROLL_DISTANCE_PER_LINE;
    state.params.set_camera_distance(distance);
}

pub fn on_key(state: &mut ViewerState, key: InputKey, action: KeyAction) -> LoopControl {
    if action == KeyAction::Release {
        return LoopControl::Continue;
    }

    let distance = state.params.camera_distance();
    match key {
        InputKey::W => state.params.set_camera_distance(distance - KEY_DISTANCE_STEP),
        InputKey::S => state.params.set_camera_distance(distance + KEY_DISTANCE_STEP),
        InputKey::Escape => return LoopControl::Exit,
        InputKey::Other => {}
    }
    LoopControl::Continue
}
