use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Brightest level produced, reached by points that never escape.
pub const GREYSCALE_CEILING: u64 = 128;

/// Linear grey ramp: `floor(iterations / max_iterations * 128)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotGreyscale {
    max_iterations: u32,
}

impl MandelbrotGreyscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn level(&self, iterations: u32) -> u8 {
        if self.max_iterations == 0 {
            return 0;
        }

        let iterations = u64::from(iterations.min(self.max_iterations));
        let level = iterations * GREYSCALE_CEILING / u64::from(self.max_iterations);

        level.min(u64::from(u8::MAX)) as u8
    }
}

impl ColourMap<u32> for MandelbrotGreyscale {
    fn map(&self, iterations: u32) -> Colour {
        Colour::grey(self.level(iterations))
    }
}
