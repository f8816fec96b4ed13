use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ViewportError {
    #[error("viewport size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("viewport size {width}x{height} exceeds the addressable pixel range")]
    TooLarge { width: u32, height: u32 },
}

/// The pixel grid the view is rendered into: `[0, width) x [0, height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(ViewportError::TooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Screen position of the view centre, in fractional pixels.
    #[must_use]
    pub fn half_extent(&self) -> [f64; 2] {
        [f64::from(self.width) / 2.0, f64::from(self.height) / 2.0]
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Row-major index of `point`, or `None` when it lies outside the viewport.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }

    /// Every pixel of the viewport in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;

        (0..height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
