use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::image_size::ImageSize;
use crate::input::gui::app::{events::gui::GuiEvent, ports::presenter::GuiPresenterPort};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        image_size: ImageSize,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<T, pixels::Error>;
}
