use thiserror::Error;

use crate::core::view::camera_state::Scale;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CameraLimitsError {
    #[error("pan speeds must be finite and non-negative, got {pan_speed} and {alias_pan_speed}")]
    InvalidPanSpeed { pan_speed: f64, alias_pan_speed: f64 },
    #[error("zoom-in factor must lie strictly between 0 and 1, got {0}")]
    InvalidZoomFactor(f64),
    #[error("scale bounds must be finite, positive and ordered, got [{min_scale}, {max_scale}]")]
    InvalidScaleRange { min_scale: f64, max_scale: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraLimits {
    /// Arrow-key pan speed, in plane units per second.
    pub pan_speed: f64,
    /// WASD pan speed, in plane units per second.
    pub alias_pan_speed: f64,
    /// Scale multiplier for one zoom-in step. Must lie in `(0, 1)`.
    pub zoom_in_factor: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl CameraLimits {
    pub fn validate(&self) -> Result<(), CameraLimitsError> {
        let speed_ok = |speed: f64| speed.is_finite() && speed >= 0.0;
        if !speed_ok(self.pan_speed) || !speed_ok(self.alias_pan_speed) {
            return Err(CameraLimitsError::InvalidPanSpeed {
                pan_speed: self.pan_speed,
                alias_pan_speed: self.alias_pan_speed,
            });
        }

        // NaN fails both comparisons
        if !(self.zoom_in_factor > 0.0 && self.zoom_in_factor < 1.0) {
            return Err(CameraLimitsError::InvalidZoomFactor(self.zoom_in_factor));
        }

        let bound_ok = |bound: f64| bound.is_finite() && bound > 0.0;
        if !bound_ok(self.min_scale) || !bound_ok(self.max_scale) || self.min_scale > self.max_scale {
            return Err(CameraLimitsError::InvalidScaleRange {
                min_scale: self.min_scale,
                max_scale: self.max_scale,
            });
        }

        Ok(())
    }

    /// Whether both axes of `scale` lie inside `[min_scale, max_scale]`.
    #[must_use]
    pub fn admits(&self, scale: Scale) -> bool {
        let inside = |value: f64| value >= self.min_scale && value <= self.max_scale;
        inside(scale.x) && inside(scale.y)
    }

    /// Exact reciprocal of the zoom-in factor, so one step in and one step out cancel.
    #[must_use]
    pub fn zoom_out_factor(&self) -> f64 {
        self.zoom_in_factor.recip()
    }
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            pan_speed: 0.5,
            alias_pan_speed: 0.1,
            zoom_in_factor: 0.95,
            min_scale: 1e-15,
            max_scale: 1e3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CameraLimits, CameraLimitsError};
    use crate::core::view::camera_state::Scale;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = CameraLimits::default();

        assert!(limits.pan_speed.is_finite() && limits.pan_speed > 0.0);
        assert!(limits.alias_pan_speed.is_finite() && limits.alias_pan_speed > 0.0);
        assert!(limits.zoom_in_factor > 0.0 && limits.zoom_in_factor < 1.0);
        assert!(limits.zoom_out_factor() > 1.0);
        assert!(limits.min_scale > 0.0);
        assert!(limits.max_scale >= limits.min_scale);
        assert!(limits.max_scale.is_finite());
    }

    #[test]
    fn zoom_factors_are_reciprocal() {
        let limits = CameraLimits::default();

        assert!((limits.zoom_in_factor * limits.zoom_out_factor() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn default_limits_validate() {
        assert_eq!(CameraLimits::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_or_nan_scale_bounds_are_rejected() {
        for (min_scale, max_scale) in [(1.0, 0.5), (f64::NAN, 1.0), (1e-3, f64::INFINITY), (0.0, 1.0)] {
            let limits = CameraLimits {
                min_scale,
                max_scale,
                ..CameraLimits::default()
            };

            assert!(matches!(
                limits.validate(),
                Err(CameraLimitsError::InvalidScaleRange { .. })
            ));
        }
    }

    #[test]
    fn zoom_factor_outside_unit_interval_is_rejected() {
        for zoom_in_factor in [0.0, 1.0, 1.05, -0.5, f64::NAN] {
            let limits = CameraLimits {
                zoom_in_factor,
                ..CameraLimits::default()
            };

            assert!(matches!(limits.validate(), Err(CameraLimitsError::InvalidZoomFactor(_))));
        }
    }

    #[test]
    fn negative_pan_speed_is_rejected() {
        let limits = CameraLimits {
            alias_pan_speed: -0.1,
            ..CameraLimits::default()
        };

        assert!(matches!(limits.validate(), Err(CameraLimitsError::InvalidPanSpeed { .. })));
    }

    #[test]
    fn admits_checks_both_axes_inclusively() {
        let limits = CameraLimits::default();

        assert!(limits.admits(Scale::uniform(0.01)));
        assert!(limits.admits(Scale::uniform(limits.max_scale)));
        assert!(!limits.admits(Scale::uniform(5000.0)));
        assert!(!limits.admits(Scale { x: 0.01, y: 1e-20 }));
    }
}
