use crate::core::actions::render_frame::ports::pixel_sink::PixelSink;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 3;

fn viewport_to_buffer_size(viewport: Viewport) -> usize {
    viewport.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of viewport {}x{}", .pixel.x, .pixel.y, .viewport.width(), .viewport.height())]
    PixelOutsideBounds { pixel: Point, viewport: Viewport },
    #[error("viewport size {viewport_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB image covering a whole viewport.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![0; viewport_to_buffer_size(viewport)],
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.viewport.index_of(pixel)? * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .viewport
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            })?
            * BYTES_PER_PIXEL;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}

impl PixelSink for PixelBuffer {
    type Failure = PixelBufferError;

    fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), Self::Failure> {
        PixelBuffer::set_pixel(self, pixel, colour)
    }
}
