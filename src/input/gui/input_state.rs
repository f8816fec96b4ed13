use crate::core::camera_control::controls::{ButtonState, CameraControlsSnapshot, PanKeys};
use crate::core::data::point::Point;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Pixel-delta scroll distance that counts as one wheel notch.
const PIXELS_PER_WHEEL_LINE: f64 = 40.0;

/// Accumulates winit events between frames and hands them out as one snapshot.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameInputState {
    keys: PanKeys,
    primary: ButtonState,
    secondary: ButtonState,
    mouse: Point,
    wheel: f64,
    reset_edge_pending: bool,
    exit_edge_pending: bool,
}

impl FrameInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::ArrowLeft => self.keys.left = pressed,
            KeyCode::ArrowRight => self.keys.right = pressed,
            KeyCode::ArrowUp => self.keys.up = pressed,
            KeyCode::ArrowDown => self.keys.down = pressed,
            KeyCode::KeyW => self.keys.w = pressed,
            KeyCode::KeyA => self.keys.a = pressed,
            KeyCode::KeyS => self.keys.s = pressed,
            KeyCode::KeyD => self.keys.d = pressed,
            KeyCode::KeyR if pressed => self.reset_edge_pending = true,
            KeyCode::Escape if pressed => self.exit_edge_pending = true,
            _ => {}
        }
    }

    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let target = match button {
            MouseButton::Left => &mut self.primary,
            MouseButton::Right | MouseButton::Middle => &mut self.secondary,
            _ => return,
        };

        match state {
            ElementState::Pressed => {
                if !target.held {
                    target.pressed = true;
                }
                target.held = true;
            }
            ElementState::Released => {
                if target.held {
                    target.released = true;
                }
                target.held = false;
            }
        }
    }

    /// `position` must already be in viewport pixels.
    pub fn handle_cursor_moved(&mut self, position: Point) {
        self.mouse = position;
    }

    pub fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        self.wheel += match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_WHEEL_LINE,
        };
    }

    /// Returns this frame's input and clears every edge and the wheel accumulator.
    ///
    /// While the overlay owns the pointer or keyboard a neutral snapshot is returned and
    /// pending edges are dropped; held state is kept so releases are still tracked.
    pub fn snapshot(&mut self, suppressed: bool) -> CameraControlsSnapshot {
        let snapshot = if suppressed {
            CameraControlsSnapshot {
                mouse: self.mouse,
                ..CameraControlsSnapshot::default()
            }
        } else {
            CameraControlsSnapshot {
                keys: self.keys,
                primary: self.primary,
                secondary: self.secondary,
                mouse: self.mouse,
                wheel: self.wheel,
                reset_edge: self.reset_edge_pending,
                exit_edge: self.exit_edge_pending,
            }
        };

        self.clear_edges();
        snapshot
    }

    pub fn reset(&mut self) {
        *self = Self {
            mouse: self.mouse,
            ..Self::default()
        };
    }

    fn clear_edges(&mut self) {
        self.primary.pressed = false;
        self.primary.released = false;
        self.secondary.pressed = false;
        self.secondary.released = false;
        self.wheel = 0.0;
        self.reset_edge_pending = false;
        self.exit_edge_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::FrameInputState;
    use crate::core::camera_control::controls::CameraControlsSnapshot;
    use crate::core::data::point::Point;
    use winit::dpi::PhysicalPosition;
    use winit::event::{ElementState, MouseButton, MouseScrollDelta};
    use winit::keyboard::KeyCode;

    #[test]
    fn press_and_release_updates_held_keys() {
        let mut input = FrameInputState::default();
        let keys = [
            KeyCode::ArrowLeft,
            KeyCode::ArrowRight,
            KeyCode::ArrowUp,
            KeyCode::ArrowDown,
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyS,
            KeyCode::KeyD,
        ];

        for key in keys {
            input.handle_key_event(key, ElementState::Pressed);
        }
        let pressed = input.snapshot(false).keys;
        assert!(pressed.left && pressed.right && pressed.up && pressed.down);
        assert!(pressed.w && pressed.a && pressed.s && pressed.d);

        for key in keys {
            input.handle_key_event(key, ElementState::Released);
        }
        let released = input.snapshot(false).keys;
        assert!(!released.left && !released.right && !released.up && !released.down);
        assert!(!released.w && !released.a && !released.s && !released.d);
    }

    #[test]
    fn mouse_press_is_an_edge_but_hold_persists() {
        let mut input = FrameInputState::default();

        input.handle_mouse_button(MouseButton::Left, ElementState::Pressed);

        let first = input.snapshot(false);
        let second = input.snapshot(false);

        assert!(first.primary.pressed && first.primary.held);
        assert!(!second.primary.pressed && second.primary.held);

        input.handle_mouse_button(MouseButton::Left, ElementState::Released);
        let third = input.snapshot(false);
        assert!(third.primary.released && !third.primary.held);
    }

    #[test]
    fn right_and_middle_buttons_map_to_secondary() {
        let mut input = FrameInputState::default();

        input.handle_mouse_button(MouseButton::Middle, ElementState::Pressed);
        assert!(input.snapshot(false).secondary.held);

        input.handle_mouse_button(MouseButton::Middle, ElementState::Released);
        input.handle_mouse_button(MouseButton::Right, ElementState::Pressed);
        let snapshot = input.snapshot(false);
        assert!(snapshot.secondary.pressed);
        assert!(!snapshot.primary.held);
    }

    #[test]
    fn wheel_accumulates_until_snapshot() {
        let mut input = FrameInputState::default();

        input.handle_mouse_wheel(MouseScrollDelta::LineDelta(0.0, 1.0));
        input.handle_mouse_wheel(MouseScrollDelta::LineDelta(0.0, 2.0));
        input.handle_mouse_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -40.0)));

        assert_eq!(input.snapshot(false).wheel, 2.0);
        assert_eq!(input.snapshot(false).wheel, 0.0);
    }

    #[test]
    fn cursor_position_is_carried_through() {
        let mut input = FrameInputState::default();

        input.handle_cursor_moved(Point { x: 12, y: -3 });

        assert_eq!(input.snapshot(false).mouse, Point { x: 12, y: -3 });
    }

    #[test]
    fn reset_and_exit_edges_fire_once() {
        let mut input = FrameInputState::default();

        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);
        input.handle_key_event(KeyCode::Escape, ElementState::Pressed);

        let first = input.snapshot(false);
        let second = input.snapshot(false);

        assert!(first.reset_edge && first.exit_edge);
        assert!(!second.reset_edge && !second.exit_edge);
    }

    #[test]
    fn suppressed_snapshot_is_neutral_and_drops_edges() {
        let mut input = FrameInputState::default();

        input.handle_key_event(KeyCode::ArrowLeft, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);
        input.handle_cursor_moved(Point { x: 4, y: 5 });

        let suppressed = input.snapshot(true);
        assert_eq!(
            suppressed,
            CameraControlsSnapshot {
                mouse: Point { x: 4, y: 5 },
                ..CameraControlsSnapshot::default()
            }
        );

        let after = input.snapshot(false);
        assert!(after.keys.left);
        assert!(!after.reset_edge);
    }

    #[test]
    fn reset_clears_everything_but_cursor() {
        let mut input = FrameInputState::default();
        input.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.handle_mouse_button(MouseButton::Left, ElementState::Pressed);
        input.handle_cursor_moved(Point { x: 7, y: 8 });

        input.reset();

        assert_eq!(
            input.snapshot(false),
            CameraControlsSnapshot {
                mouse: Point { x: 7, y: 8 },
                ..CameraControlsSnapshot::default()
            }
        );
    }
}
