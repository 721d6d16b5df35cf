pub mod core;
mod controllers;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::headless::{HeadlessController, HeadlessError};
pub use controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderEvent, RenderRequest,
};

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::config::GuiConfig;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
