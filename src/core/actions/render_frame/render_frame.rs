use log::debug;
use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::generate_fractal_tiled_rayon::generate_fractal_tiled_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::modulo_palette::MandelbrotModuloPalette;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::iteration_budget::iteration_budget;
use crate::core::util::calculate_tiles_in_image::DEFAULT_TILE_SIZE;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug)]
pub enum RenderFrameError {
    Algorithm(MandelbrotError),
    Kernel(PixelToComplexCoordsError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "mandelbrot setup error: {}", err),
            Self::Kernel(err) => write!(f, "fractal algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Kernel(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderFrameError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<PixelToComplexCoordsError> for RenderFrameError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Kernel(err)
    }
}

impl From<PixelBufferError> for RenderFrameError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders one frame of `viewport` at `image_size`.
///
/// Derives the iteration budget from the viewport, runs the escape-time
/// kernel over every pixel in parallel tiles, then colours the counts. Pure:
/// equal inputs give byte-identical buffers.
pub fn render_frame(
    viewport: Viewport,
    image_size: ImageSize,
) -> Result<PixelBuffer, RenderFrameError> {
    let max_iterations = iteration_budget(&viewport);

    debug!(
        "rendering {}x{} frame, x [{}, {}], y [{}, {}], max iterations {}",
        image_size.width(),
        image_size.height(),
        viewport.min_x(),
        viewport.max_x(),
        viewport.min_y(),
        viewport.max_y(),
        max_iterations
    );

    let algorithm = MandelbrotAlgorithm::new(image_size, viewport, max_iterations)?;
    let counts = generate_fractal_tiled_rayon(image_size, DEFAULT_TILE_SIZE, &algorithm)?;

    Ok(generate_pixel_buffer(
        counts,
        &MandelbrotModuloPalette::new(),
        image_size,
    )?)
}
