use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Squared escape radius; comparing `|z|²` against it avoids a square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts how many times `z ← z² + c` is applied, starting from `z = 0`,
/// before `|z|²` exceeds [`ESCAPE_RADIUS_SQUARED`] or `max_iterations` is
/// reached. The result is in `0..=max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut count = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && count < max_iterations {
        z = z.square() + c;
        count += 1;
    }

    count
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    image_size: ImageSize,
    viewport: Viewport,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.image_size, self.viewport)?;

        Ok(escape_time(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        image_size: ImageSize,
        viewport: Viewport,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            image_size,
            viewport,
            max_iterations,
        })
    }
}
