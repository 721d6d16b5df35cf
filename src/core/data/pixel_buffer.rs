use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn image_size_to_buffer_size(image_size: ImageSize) -> usize {
    image_size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        image_size_bytes: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                image_size_bytes,
                buffer_size,
            } => {
                write!(
                    f,
                    "image needs {} bytes but buffer holds {}",
                    image_size_bytes, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB bytes for one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    image_size: ImageSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        image_size: ImageSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let image_size_bytes = image_size_to_buffer_size(image_size);

        if image_size_bytes != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                image_size_bytes,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { image_size, buffer })
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if !self.image_size.contains_point(point) {
            return None;
        }

        let index =
            (point.y as usize * self.image_size.width() as usize + point.x as usize) * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
