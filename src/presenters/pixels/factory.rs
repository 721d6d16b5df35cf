use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::image_size::ImageSize;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory;

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        image_size: ImageSize,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, image_size, event_loop_proxy)
    }
}
