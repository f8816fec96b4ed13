use crate::core::data::complex::Complex;

/// Plane units per pixel, independently for each axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    #[must_use]
    pub const fn uniform(units_per_pixel: f64) -> Self {
        Self { x: units_per_pixel, y: units_per_pixel }
    }

    /// Both components strictly positive and finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.x > 0.0 && self.y > 0.0
    }

    #[must_use]
    pub fn zoomed(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Componentwise product with a screen-space offset, giving a plane-space offset.
    #[must_use]
    pub fn apply(&self, screen_dx: f64, screen_dy: f64) -> Complex {
        Complex {
            real: self.x * screen_dx,
            imag: self.y * screen_dy,
        }
    }
}

/// Everything needed to map between screen and plane: the plane point shown at the
/// screen midpoint and the size of a pixel in plane units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraState {
    pub center: Complex,
    pub scale: Scale,
}

impl CameraState {
    #[must_use]
    pub const fn new(center: Complex, scale: Scale) -> Self {
        Self { center, scale }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            scale: Scale::uniform(0.01),
        }
    }
}
