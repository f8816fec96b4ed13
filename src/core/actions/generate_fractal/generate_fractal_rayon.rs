use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each pixel is computed independently and written to its own slot, so the result is
/// identical to [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(viewport: Viewport, algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    let width = viewport.width() as i32;

    (0..viewport.height() as i32)
        .into_par_iter()
        .flat_map_iter(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
