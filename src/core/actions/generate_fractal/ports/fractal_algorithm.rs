use crate::core::data::point::Point;

/// A per-pixel computation with no dependency on any other pixel.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;
}
