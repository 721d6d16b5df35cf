use std::time::Duration;

use crate::core::data::image_size::ImageSize;

pub const DEFAULT_WINDOW_TITLE: &str = "Mandelbrot Zoom";
pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 0.5;
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 2.0;
pub const DEFAULT_ZOOM_COOLDOWN: Duration = Duration::from_millis(200);

/// Window and input settings for the interactive shell.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiConfig {
    pub title: String,
    /// Size of the rendered frame. The window surface scales it on resize.
    pub image_size: ImageSize,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Minimum gap between two accepted wheel zooms.
    pub zoom_cooldown: Duration,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            image_size: ImageSize::default(),
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            zoom_cooldown: DEFAULT_ZOOM_COOLDOWN,
        }
    }
}
