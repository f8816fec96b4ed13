use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;

/// Destination for rendered pixels, written once per pixel per frame.
pub trait PixelSink {
    type Failure: Error + 'static;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure>;
}
