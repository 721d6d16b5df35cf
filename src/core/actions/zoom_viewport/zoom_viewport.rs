use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    InvalidFactor { factor: f64 },
    Pixel(PixelToComplexCoordsError),
    Viewport(ViewportError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFactor { factor } => {
                write!(f, "zoom factor must be finite and positive: {}", factor)
            }
            Self::Pixel(err) => write!(f, "zoom anchor error: {}", err),
            Self::Viewport(err) => write!(f, "zoomed viewport error: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFactor { .. } => None,
            Self::Pixel(err) => Some(err),
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for ZoomError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Pixel(err)
    }
}

impl From<ViewportError> for ZoomError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Scales `viewport` by `factor` and recentres it on the complex point under
/// `pixel`.
///
/// `factor < 1` zooms in, `factor > 1` zooms out. There is no depth limit;
/// once `f64` precision collapses the span to zero the resulting viewport is
/// rejected with [`ZoomError::Viewport`].
pub fn zoom_viewport(
    factor: f64,
    pixel: Point,
    viewport: Viewport,
    image_size: ImageSize,
) -> Result<Viewport, ZoomError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ZoomError::InvalidFactor { factor });
    }

    if !image_size.contains_point(pixel) {
        return Err(ZoomError::Pixel(PixelToComplexCoordsError::PointOutsideImage {
            point: pixel,
            image_size,
        }));
    }

    // fraction of the image first, then scaled by the span
    let centre = Complex {
        real: viewport.min_x()
            + (f64::from(pixel.x) / f64::from(image_size.width())) * viewport.width(),
        imag: viewport.min_y()
            + (f64::from(pixel.y) / f64::from(image_size.height())) * viewport.height(),
    };
    let new_width = viewport.width() * factor;
    let new_height = viewport.height() * factor;

    Ok(Viewport::centred_on(centre, new_width, new_height)?)
}
