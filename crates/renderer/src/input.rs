use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Touchpads report scroll in pixels; this many pixels count as one wheel line.
const PIXELS_PER_SCROLL_LINE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Keys the viewer cares about; everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    W,
    S,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

/// Host-independent input event handed to [`crate::Application::handle_input`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button pressed while the cursor was at `(x, y)` physical pixels.
    PointerPressed { button: PointerButton, x: f64, y: f64 },
    PointerReleased { button: PointerButton },
    PointerMoved { x: f64, y: f64 },
    /// Vertical scroll in wheel lines, positive away from the user.
    Scroll { y_offset: f64 },
    Key { key: InputKey, action: KeyAction },
}

/// Whether the loop keeps running after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopControl {
    #[default]
    Continue,
    Exit,
}

/// Converts `winit` window events into [`InputEvent`]s.
///
/// The translator remembers the last cursor position because `winit` does
/// not attach one to button events. Events the overlay consumed are dropped,
/// except releases and `Escape`, so a drag can never get stuck and the exit
/// key always works.
#[derive(Debug, Default)]
pub struct EventTranslator {
    cursor: Option<PhysicalPosition<f64>>,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &WindowEvent, consumed: bool) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(*position);
                (!consumed).then_some(InputEvent::PointerMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button);
                match state {
                    ElementState::Pressed if !consumed => {
                        let position = self.cursor.unwrap_or(PhysicalPosition::new(0.0, 0.0));
                        Some(InputEvent::PointerPressed {
                            button,
                            x: position.x,
                            y: position.y,
                        })
                    }
                    ElementState::Pressed => None,
                    ElementState::Released => Some(InputEvent::PointerReleased { button }),
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed => Some(InputEvent::Scroll {
                y_offset: scroll_lines(*delta),
            }),
            WindowEvent::KeyboardInput { event, .. } => {
                let key = input_key(event.physical_key);
                forwards_key(key, consumed).then_some(InputEvent::Key {
                    key,
                    action: key_action(event.state, event.repeat),
                })
            }
            _ => None,
        }
    }
}

pub(crate) fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

pub(crate) fn input_key(key: PhysicalKey) -> InputKey {
    match key {
        PhysicalKey::Code(KeyCode::KeyW) => InputKey::W,
        PhysicalKey::Code(KeyCode::KeyS) => InputKey::S,
        PhysicalKey::Code(KeyCode::Escape) => InputKey::Escape,
        _ => InputKey::Other,
    }
}

/// `Escape` reaches the application even when the overlay consumed it.
pub(crate) fn forwards_key(key: InputKey, consumed: bool) -> bool {
    !consumed || key == InputKey::Escape
}

pub(crate) fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Released, _) => KeyAction::Release,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Pressed, false) => KeyAction::Press,
    }
}

pub(crate) fn scroll_lines(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_SCROLL_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_viewer_keys_by_physical_position() {
        assert_eq!(input_key(PhysicalKey::Code(KeyCode::KeyW)), InputKey::W);
        assert_eq!(input_key(PhysicalKey::Code(KeyCode::KeyS)), InputKey::S);
        assert_eq!(input_key(PhysicalKey::Code(KeyCode::Escape)), InputKey::Escape);
        assert_eq!(input_key(PhysicalKey::Code(KeyCode::KeyQ)), InputKey::Other);
    }

    #[test]
    fn distinguishes_press_repeat_and_release() {
        assert_eq!(key_action(ElementState::Pressed, false), KeyAction::Press);
        assert_eq!(key_action(ElementState::Pressed, true), KeyAction::Repeat);
        assert_eq!(key_action(ElementState::Released, true), KeyAction::Release);
    }

    #[test]
    fn pixel_scroll_is_converted_to_lines() {
        let lines = scroll_lines(MouseScrollDelta::LineDelta(0.0, 3.0));
        assert!((lines - 3.0).abs() < 1e-9);

        let pixels = scroll_lines(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0)));
        assert!((pixels + 2.0).abs() < 1e-9);
    }

    fn mouse_input(state: ElementState) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: unsafe { winit::event::DeviceId::dummy() },
            state,
            button: MouseButton::Left,
        }
    }

    fn cursor_moved(x: f64, y: f64) -> WindowEvent {
        WindowEvent::CursorMoved {
            device_id: unsafe { winit::event::DeviceId::dummy() },
            position: PhysicalPosition::new(x, y),
        }
    }

    #[test]
    fn consumed_press_is_dropped_but_release_is_forwarded() {
        let mut translator = EventTranslator::new();
        assert_eq!(translator.translate(&mouse_input(ElementState::Pressed), true), None);
        assert_eq!(
            translator.translate(&mouse_input(ElementState::Released), true),
            Some(InputEvent::PointerReleased {
                button: PointerButton::Primary
            })
        );
    }

    #[test]
    fn press_reports_last_cursor_even_after_consumed_move() {
        let mut translator = EventTranslator::new();
        assert_eq!(translator.translate(&cursor_moved(12.0, 34.0), true), None);
        assert_eq!(translator.cursor, Some(PhysicalPosition::new(12.0, 34.0)));
        assert_eq!(
            translator.translate(&mouse_input(ElementState::Pressed), false),
            Some(InputEvent::PointerPressed {
                button: PointerButton::Primary,
                x: 12.0,
                y: 34.0,
            })
        );
    }

    #[test]
    fn unconsumed_move_is_forwarded() {
        let mut translator = EventTranslator::new();
        assert_eq!(
            translator.translate(&cursor_moved(1.0, 2.0), false),
            Some(InputEvent::PointerMoved { x: 1.0, y: 2.0 })
        );
    }

    #[test]
    fn escape_survives_overlay_focus() {
        assert!(forwards_key(InputKey::Escape, true));
        assert!(!forwards_key(InputKey::W, true));
        assert!(!forwards_key(InputKey::Other, true));
        assert!(forwards_key(InputKey::S, false));
    }

    #[test]
    fn left_button_is_primary() {
        assert_eq!(pointer_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(pointer_button(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(pointer_button(MouseButton::Other(7)), PointerButton::Other);
    }
}
