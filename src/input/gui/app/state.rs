use log::{debug, warn};
use std::time::Instant;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::zoom_cooldown::ZoomCooldown;
use crate::input::gui::app::zoom_input::ZoomDirection;
use crate::input::gui::config::GuiConfig;

pub struct GuiAppState {
    pub mandelbrot: MandelbrotConfig,
    image_size: ImageSize,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
    zoom_cooldown: ZoomCooldown,
    cursor: Option<Point>,
    last_submitted_request: Option<RenderRequest>,
    pub latest_submitted_generation: u64,
}

impl GuiAppState {
    #[must_use]
    pub fn new(config: &GuiConfig) -> Self {
        Self {
            mandelbrot: MandelbrotConfig::default(),
            image_size: config.image_size,
            zoom_in_factor: config.zoom_in_factor,
            zoom_out_factor: config.zoom_out_factor,
            zoom_cooldown: ZoomCooldown::new(config.zoom_cooldown),
            cursor: None,
            last_submitted_request: None,
            latest_submitted_generation: 0,
        }
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// `None` when the pointer is outside the rendered image.
    pub fn set_cursor(&mut self, cursor: Option<Point>) {
        self.cursor = cursor;
    }

    /// Applies a wheel zoom at the cursor. Returns true when the viewport
    /// changed.
    pub fn try_zoom(&mut self, direction: ZoomDirection, now: Instant) -> bool {
        let Some(pixel) = self.cursor else {
            debug!("ignoring zoom {:?}: cursor outside image", direction);
            return false;
        };

        if !self.zoom_cooldown.try_accept(now) {
            debug!("ignoring zoom {:?}: inside cooldown", direction);
            return false;
        }

        let factor = match direction {
            ZoomDirection::In => self.zoom_in_factor,
            ZoomDirection::Out => self.zoom_out_factor,
        };

        match self.mandelbrot.zoom(factor, pixel, self.image_size) {
            Ok(viewport) => {
                debug!(
                    "zoom {:?} at ({}, {}): x [{}, {}], y [{}, {}]",
                    direction,
                    pixel.x,
                    pixel.y,
                    viewport.min_x(),
                    viewport.max_x(),
                    viewport.min_y(),
                    viewport.max_y()
                );
                true
            }
            Err(err) => {
                warn!("zoom rejected: {}", err);
                false
            }
        }
    }

    #[must_use]
    pub fn build_render_request(&self) -> RenderRequest {
        RenderRequest {
            image_size: self.image_size,
            viewport: self.mandelbrot.viewport,
        }
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last != request)
    }

    pub fn record_submission(&mut self, request: RenderRequest, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    pub fn reset_view(&mut self) {
        debug!("resetting view");
        self.mandelbrot.reset_view();
    }
}
