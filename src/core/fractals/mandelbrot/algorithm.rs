use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::view::transform::ViewTransform;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time count for `c`: iterates `z = z² + c` from zero until `|z|² > 4` or
/// `max_iterations` steps have been taken. The result is always in `0..=max_iterations`.
#[must_use]
#[inline]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        iterations += 1;
    }

    iterations
}

/// Mandelbrot escape-time evaluation over the pixels of one frame.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    transform: ViewTransform,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, pixel: Point) -> Self::Output {
        escape_time(self.transform.pixel_to_plane(pixel), self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(transform: ViewTransform, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { transform, max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: ViewTransform) {
        self.transform = transform;
    }
}
