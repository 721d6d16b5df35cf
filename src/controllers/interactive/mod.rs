//! Interactive controller for real-time Mandelbrot rendering.
//!
//! Owns a background worker that turns [`RenderRequest`]s into frames and
//! hands them to the presentation layer.
//!
//! # Architecture
//!
//! Ports and adapters:
//! - **Input**: `RenderRequest` snapshots describing what to render
//! - **Output**: `InteractiveControllerPresenterPort` receiving `RenderEvent`s
//! - **Core**: `render_frame` from `core/` does the computation

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::render_request::RenderRequest;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
