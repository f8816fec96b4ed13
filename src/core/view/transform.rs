//! Affine maps between screen pixels and the complex plane.
//!
//! A [`ViewTransform`] is derived from a [`CameraState`] and a [`Viewport`] once per
//! frame and never updated incrementally, so the forward and inverse maps cannot drift
//! apart.

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::view::camera_state::{CameraState, Scale};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    center: Complex,
    scale: Scale,
    half_extent: [f64; 2],
}

impl ViewTransform {
    #[must_use]
    pub fn new(camera: &CameraState, viewport: Viewport) -> Self {
        Self {
            center: camera.center,
            scale: camera.scale,
            half_extent: viewport.half_extent(),
        }
    }

    /// `center + scale ⊙ (screen - half_extent)`
    #[must_use]
    pub fn to_plane(&self, screen_x: f64, screen_y: f64) -> Complex {
        self.center
            + self
                .scale
                .apply(screen_x - self.half_extent[0], screen_y - self.half_extent[1])
    }

    #[must_use]
    pub fn pixel_to_plane(&self, pixel: Point) -> Complex {
        self.to_plane(f64::from(pixel.x), f64::from(pixel.y))
    }

    /// Inverse of [`ViewTransform::to_plane`], in fractional pixels.
    #[must_use]
    pub fn to_screen(&self, plane: Complex) -> [f64; 2] {
        let offset = plane - self.center;

        [
            self.half_extent[0] + offset.real / self.scale.x,
            self.half_extent[1] + offset.imag / self.scale.y,
        ]
    }

    /// [`ViewTransform::to_screen`] rounded to the nearest pixel.
    #[must_use]
    pub fn plane_to_pixel(&self, plane: Complex) -> Point {
        let [x, y] = self.to_screen(plane);

        Point {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }
}
