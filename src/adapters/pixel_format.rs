//! Pixel sink over a borrowed RGBA8 framebuffer, such as the one `pixels` exposes.

use crate::core::actions::render_frame::ports::pixel_sink::PixelSink;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

const BYTES_PER_PIXEL: usize = 4;

pub struct RgbaFrameSink<'a> {
    frame: &'a mut [u8],
    viewport: Viewport,
}

impl<'a> RgbaFrameSink<'a> {
    /// Fails when `frame` does not hold exactly one RGBA pixel per viewport pixel.
    pub fn new(frame: &'a mut [u8], viewport: Viewport) -> Result<Self, PixelBufferError> {
        let viewport_size = viewport.size() * BYTES_PER_PIXEL;

        if frame.len() != viewport_size {
            return Err(PixelBufferError::BoundsMismatch {
                viewport_size,
                buffer_size: frame.len(),
            });
        }

        Ok(Self { frame, viewport })
    }
}

impl PixelSink for RgbaFrameSink<'_> {
    type Failure = PixelBufferError;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure> {
        let index = self
            .viewport
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            })?
            * BYTES_PER_PIXEL;

        self.frame[index..index + BYTES_PER_PIXEL].copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_frame() {
        let mut frame = vec![0; 4 * 4 - 1];
        let viewport = Viewport::new(2, 2).unwrap();

        let result = RgbaFrameSink::new(&mut frame, viewport);

        assert_eq!(
            result.err(),
            Some(PixelBufferError::BoundsMismatch {
                viewport_size: 16,
                buffer_size: 15
            })
        );
    }

    #[test]
    fn test_set_pixel_writes_opaque_rgba() {
        let mut frame = vec![0; 2 * 2 * 4];
        let viewport = Viewport::new(2, 2).unwrap();

        {
            let mut sink = RgbaFrameSink::new(&mut frame, viewport).unwrap();
            sink.set_pixel(Point { x: 1, y: 1 }, Colour { r: 1, g: 2, b: 3 }).unwrap();
        }

        assert_eq!(&frame[12..16], &[1, 2, 3, 255]);
        assert!(frame[..12].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_set_pixel_outside_viewport_fails() {
        let mut frame = vec![0; 2 * 2 * 4];
        let viewport = Viewport::new(2, 2).unwrap();
        let mut sink = RgbaFrameSink::new(&mut frame, viewport).unwrap();

        let result = sink.set_pixel(Point { x: 0, y: 2 }, Colour::grey(5));

        assert!(matches!(result, Err(PixelBufferError::PixelOutsideBounds { .. })));
    }
}
