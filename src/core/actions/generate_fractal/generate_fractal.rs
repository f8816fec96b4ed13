use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::viewport::Viewport;

/// Evaluates `algorithm` for every pixel of `viewport`, in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(viewport: Viewport, algorithm: &Alg) -> Vec<Alg::Output> {
    viewport
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
