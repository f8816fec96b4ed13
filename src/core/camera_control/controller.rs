use log::{debug, warn};

use crate::core::camera_control::controls::{CameraControlsSnapshot, PanKeys};
use crate::core::camera_control::limits::CameraLimits;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::view::camera_state::{CameraState, Scale};

/// Captured when a mouse button goes down. The drag offset is measured from here using
/// the scale at press time rather than a live inverse transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub mouse: Point,
    pub center: Complex,
    pub scale: Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraStepReport {
    pub view_changed: bool,
    pub scale_clamped: bool,
    pub reset: bool,
    pub exit_requested: bool,
}

/// Turns one frame of input into an update of the camera.
#[derive(Debug, Clone)]
pub struct CameraController {
    limits: CameraLimits,
    home: CameraState,
    drag: Option<DragAnchor>,
}

impl CameraController {
    #[must_use]
    pub fn new(home: CameraState, limits: CameraLimits) -> Self {
        Self {
            limits,
            home,
            drag: None,
        }
    }

    #[must_use]
    pub fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag
    }

    pub fn step(
        &mut self,
        camera: &mut CameraState,
        controls: &CameraControlsSnapshot,
        elapsed_seconds: f64,
    ) -> CameraStepReport {
        let before = *camera;
        let mut report = CameraStepReport {
            exit_requested: controls.exit_edge,
            ..CameraStepReport::default()
        };

        if controls.reset_edge {
            debug!("resetting view to {:?}", self.home);
            *camera = self.home;
            self.drag = None;
            report.reset = true;
        }

        let dt = if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            elapsed_seconds
        } else {
            0.0
        };

        let pan = self.keyboard_pan(controls.keys, dt);
        camera.center = camera.center + pan;
        if let Some(anchor) = self.drag.as_mut() {
            anchor.center = anchor.center + pan;
        }

        self.update_drag(camera, controls);

        report.scale_clamped = self.update_zoom(camera, controls);
        report.view_changed = *camera != before;
        report
    }

    fn keyboard_pan(&self, keys: PanKeys, dt: f64) -> Complex {
        let arrows = Complex {
            real: axis_from_pair(keys.right, keys.left),
            imag: axis_from_pair(keys.down, keys.up),
        };
        let aliases = Complex {
            real: axis_from_pair(keys.d, keys.a),
            imag: axis_from_pair(keys.s, keys.w),
        };

        let arrow_step = self.limits.pan_speed * dt;
        let alias_step = self.limits.alias_pan_speed * dt;

        Complex {
            real: arrows.real * arrow_step + aliases.real * alias_step,
            imag: arrows.imag * arrow_step + aliases.imag * alias_step,
        }
    }

    fn update_drag(&mut self, camera: &mut CameraState, controls: &CameraControlsSnapshot) {
        if controls.any_button_pressed() {
            let anchor = DragAnchor {
                mouse: controls.mouse,
                center: camera.center,
                scale: camera.scale,
            };
            debug!("drag anchored at {:?}", anchor);
            self.drag = Some(anchor);
        }

        if !controls.any_button_held() {
            if self.drag.take().is_some() {
                debug!("drag released at {:?}", camera.center);
            }
            return;
        }

        if let Some(anchor) = self.drag {
            let offset = anchor.scale.apply(
                f64::from(anchor.mouse.x) - f64::from(controls.mouse.x),
                f64::from(anchor.mouse.y) - f64::from(controls.mouse.y),
            );
            camera.center = anchor.center + offset;
        }
    }

    /// Applies this frame's zoom steps. Returns whether the scale had to be clamped.
    fn update_zoom(&self, camera: &mut CameraState, controls: &CameraControlsSnapshot) -> bool {
        let mut factor = 1.0;

        if controls.wheel > 0.0 {
            factor *= self.limits.zoom_in_factor;
        } else if controls.wheel < 0.0 {
            factor *= self.limits.zoom_out_factor();
        }

        if controls.secondary.held {
            factor *= self.limits.zoom_in_factor;
        }

        if factor == 1.0 && camera.scale.is_valid() {
            return false;
        }

        let (scale, clamped) = self.clamp_scale(camera.scale.zoomed(factor));
        if clamped {
            warn!("scale clamped to {:?}", scale);
        }
        camera.scale = scale;
        clamped
    }

    fn clamp_scale(&self, scale: Scale) -> (Scale, bool) {
        let x = self.clamp_axis(scale.x, self.home.scale.x);
        let y = self.clamp_axis(scale.y, self.home.scale.y);
        let clamped = Scale { x, y };

        (clamped, clamped != scale)
    }

    fn clamp_axis(&self, value: f64, fallback: f64) -> f64 {
        if value.is_nan() {
            return fallback;
        }

        // limits built through `new` may be unvalidated; this must not panic
        value.max(self.limits.min_scale).min(self.limits.max_scale)
    }
}

fn axis_from_pair(positive: bool, negative: bool) -> f64 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}
