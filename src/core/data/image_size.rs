use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_IMAGE_WIDTH: u32 = 800;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 800;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ImageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "image size must be positive and fit in i32: {}x{}", width, height)
            }
        }
    }
}

impl Error for ImageSizeError {}

/// Dimensions of the rendered image. Pixels span `[0, width) × [0, height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ImageSizeError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(ImageSizeError::InvalidSize { width, height });
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
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[must_use]
    pub fn centre(&self) -> Point {
        Point {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}
