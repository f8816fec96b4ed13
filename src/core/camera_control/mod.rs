pub mod controller;
pub mod controls;
pub mod limits;

pub use controller::{CameraController, CameraStepReport, DragAnchor};
pub use controls::{ButtonState, CameraControlsSnapshot, PanKeys};
pub use limits::{CameraLimits, CameraLimitsError};
