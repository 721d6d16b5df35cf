use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// What the overlay shows about the frame currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentedFrame {
    pub generation: u64,
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub render_duration: Duration,
}

pub trait GuiPresenterPort {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Pulls the newest render event from the adapter. Returns true when the
    /// on-screen frame or error changed.
    fn receive_render_event(&mut self) -> bool;

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    /// Maps a physical window position onto the rendered image.
    fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<Point>;

    fn presented_frame(&self) -> Option<PresentedFrame>;

    fn last_error_message(&self) -> Option<&str>;
}
