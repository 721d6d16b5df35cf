use crate::core::{
    actions::zoom_viewport::zoom_viewport::{ZoomError, zoom_viewport},
    data::{image_size::ImageSize, point::Point, viewport::Viewport},
    fractals::mandelbrot::iteration_budget::iteration_budget,
};

pub(crate) fn default_viewport() -> Viewport {
    Viewport::new(-2.0, 1.0, -1.5, 1.5).expect("default viewport is valid")
}

/// The live view state. The viewport is only ever replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub viewport: Viewport,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        iteration_budget(&self.viewport)
    }

    /// Zooms around `pixel`. On error the current viewport is left untouched.
    pub fn zoom(
        &mut self,
        factor: f64,
        pixel: Point,
        image_size: ImageSize,
    ) -> Result<Viewport, ZoomError> {
        let viewport = zoom_viewport(factor, pixel, self.viewport, image_size)?;
        self.viewport = viewport;

        Ok(viewport)
    }

    pub fn reset_view(&mut self) {
        self.viewport = default_viewport();
    }
}
