use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideImage { point: Point, image_size: ImageSize },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideImage { point, image_size } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} image",
                    point.x,
                    point.y,
                    image_size.width(),
                    image_size.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Linear interpolation from pixel space onto the viewport.
///
/// Pixel `(0, 0)` maps to `(min_x, min_y)`. The divisor is the full image
/// width (not `width - 1`), so the last column stops one pixel short of
/// `max_x`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    image_size: ImageSize,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !image_size.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideImage {
            point: pixel_position,
            image_size,
        });
    }

    let real = viewport.min_x()
        + pixel_position.x as f64 * viewport.width() / image_size.width() as f64;
    let imag = viewport.min_y()
        + pixel_position.y as f64 * viewport.height() / image_size.height() as f64;

    Ok(Complex { real, imag })
}
