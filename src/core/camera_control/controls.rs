use crate::core::data::point::Point;

/// Edge and level state of a single button for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Went down during this frame.
    pub pressed: bool,
    /// Down at the end of this frame.
    pub held: bool,
    /// Went up during this frame.
    pub released: bool,
}

/// Held flags of the pan keys. Arrows and WASD pan at separate speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
}

/// Everything the camera controller reads for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraControlsSnapshot {
    pub keys: PanKeys,
    pub primary: ButtonState,
    pub secondary: ButtonState,
    /// Cursor position in viewport pixels.
    pub mouse: Point,
    /// Signed wheel movement accumulated over the frame; positive is away from the user.
    pub wheel: f64,
    pub reset_edge: bool,
    pub exit_edge: bool,
}

impl CameraControlsSnapshot {
    #[must_use]
    pub fn any_button_pressed(&self) -> bool {
        self.primary.pressed || self.secondary.pressed
    }

    #[must_use]
    pub fn any_button_held(&self) -> bool {
        self.primary.held || self.secondary.held
    }
}
