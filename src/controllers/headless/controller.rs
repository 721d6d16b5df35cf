use log::info;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

#[derive(Debug)]
pub enum HeadlessError {
    NothingRendered,
    Render(RenderFrameError),
}

impl fmt::Display for HeadlessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingRendered => write!(f, "no frame has been rendered yet"),
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for HeadlessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NothingRendered => None,
            Self::Render(err) => Some(err),
        }
    }
}

impl From<RenderFrameError> for HeadlessError {
    fn from(err: RenderFrameError) -> Self {
        Self::Render(err)
    }
}

/// FNV-1a over the raw RGB bytes. Lets two runs be compared from the log.
fn frame_checksum(buffer: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    buffer.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}

/// Renders a single frame without a window.
pub struct HeadlessController {
    config: MandelbrotConfig,
    image_size: ImageSize,
    frame: Option<PixelBuffer>,
}

impl HeadlessController {
    pub fn new(config: MandelbrotConfig, image_size: ImageSize) -> Self {
        Self {
            config,
            image_size,
            frame: None,
        }
    }

    pub fn generate(&mut self) -> Result<u64, HeadlessError> {
        let viewport = self.config.viewport;

        info!(
            "rendering {}x{} frame, x [{}, {}], y [{}, {}]",
            self.image_size.width(),
            self.image_size.height(),
            viewport.min_x(),
            viewport.max_x(),
            viewport.min_y(),
            viewport.max_y()
        );
        info!("max iterations: {}", self.config.iteration_budget());

        let start = Instant::now();
        let frame = render_frame(viewport, self.image_size)?;
        let duration = start.elapsed();
        let checksum = frame_checksum(frame.buffer());

        info!("duration: {:?}", duration);
        info!("checksum: {:016x}", checksum);

        self.frame = Some(frame);

        Ok(checksum)
    }

    pub fn frame(&self) -> Result<&PixelBuffer, HeadlessError> {
        self.frame.as_ref().ok_or(HeadlessError::NothingRendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;

    #[test]
    fn test_frame_before_generate_is_an_error() {
        let controller =
            HeadlessController::new(MandelbrotConfig::default(), ImageSize::new(4, 4).unwrap());

        assert!(matches!(
            controller.frame(),
            Err(HeadlessError::NothingRendered)
        ));
    }

    #[test_log::test]
    fn test_generate_renders_configured_view() {
        let image_size = ImageSize::new(32, 24).unwrap();
        let config = MandelbrotConfig::default();
        let mut controller = HeadlessController::new(config, image_size);

        let checksum = controller.generate().unwrap();
        let frame = controller.frame().unwrap();

        assert_eq!(frame, &render_frame(config.viewport, image_size).unwrap());
        assert_eq!(checksum, frame_checksum(frame.buffer()));
    }

    #[test]
    fn test_checksum_tracks_viewport() {
        let image_size = ImageSize::new(16, 16).unwrap();
        let mut default_view = HeadlessController::new(MandelbrotConfig::default(), image_size);
        let mut other_view = HeadlessController::new(
            MandelbrotConfig {
                viewport: Viewport::new(-0.8, -0.7, 0.0, 0.1).unwrap(),
            },
            image_size,
        );

        let first = default_view.generate().unwrap();
        let again = default_view.generate().unwrap();
        let other = other_view.generate().unwrap();

        assert_eq!(first, again);
        assert_ne!(first, other);
    }

    #[test]
    fn test_checksum_of_empty_input_is_offset_basis() {
        assert_eq!(frame_checksum(&[]), 0xcbf2_9ce4_8422_2325);
    }
}
