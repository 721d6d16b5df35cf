use std::error::Error;
use std::marker::PhantomData;

use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::input::gui::app::{
    events::gui::GuiEvent, gui_app::GuiApp, ports::presenter::GuiPresenterPort,
};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::config::GuiConfig;

const MIN_WINDOW_SIZE: f64 = 200.0;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: GuiConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: GuiConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();
        let image_size = self.config.image_size;

        // pixels needs a surface that outlives the event loop
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.title.as_str())
                .with_inner_size(LogicalSize::new(
                    f64::from(image_size.width()),
                    f64::from(image_size.height()),
                ))
                .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIZE, MIN_WINDOW_SIZE))
                .build(&event_loop)?,
        ));

        info!(
            "window '{}' created, zoom cooldown {:?}",
            self.config.title, self.config.zoom_cooldown
        );

        let presenter: P = self
            .presenter_factory
            .build(window, image_size, event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let app = GuiApp::new(window, &event_loop, presenter, controller, &self.config);

        app.run(event_loop)?;

        Ok(())
    }
}
