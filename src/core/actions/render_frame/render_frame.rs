use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::pixel_sink::PixelSink;
use crate::core::data::viewport::Viewport;

/// How the per-pixel evaluation is scheduled. Both produce identical frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    Sequential,
    #[default]
    Parallel,
}

/// Evaluates every pixel of `viewport`, maps the result through `colour_map` and
/// writes the colour to `sink` in row-major order.
pub fn render_frame<Alg, CMap, S>(
    viewport: Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    mode: RenderMode,
    sink: &mut S,
) -> Result<(), S::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
    CMap: ColourMap<Alg::Output>,
    S: PixelSink,
{
    let values = match mode {
        RenderMode::Sequential => generate_fractal(viewport, algorithm),
        RenderMode::Parallel => generate_fractal_rayon(viewport, algorithm),
    };

    for (pixel, value) in viewport.points().zip(values) {
        sink.set_pixel(pixel, colour_map.map(value))?;
    }

    Ok(())
}
