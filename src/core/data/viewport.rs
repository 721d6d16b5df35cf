use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteBounds {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
    InvalidSize {
        width: f64,
        height: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds {
                min_x,
                max_x,
                min_y,
                max_y,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite: x [{}, {}], y [{}, {}]",
                    min_x, max_x, min_y, max_y
                )
            }
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane mapped onto the image.
///
/// `min_y` is the imaginary part shown on the top row of pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Viewport {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, ViewportError> {
        if !(min_x.is_finite() && max_x.is_finite() && min_y.is_finite() && max_y.is_finite()) {
            return Err(ViewportError::NonFiniteBounds {
                min_x,
                max_x,
                min_y,
                max_y,
            });
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Builds the viewport of the given extents centred on `centre`.
    pub fn centred_on(centre: Complex, width: f64, height: f64) -> Result<Self, ViewportError> {
        Self::new(
            centre.real - width / 2.0,
            centre.real + width / 2.0,
            centre.imag - height / 2.0,
            centre.imag + height / 2.0,
        )
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex {
            real: (self.min_x + self.max_x) / 2.0,
            imag: (self.min_y + self.max_y) / 2.0,
        }
    }
}
