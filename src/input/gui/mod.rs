//! Windowed shell for interactive zooming.
//!
//! winit owns the window and event loop, pixels blits the rendered frame and
//! egui draws the status overlay on top.

pub mod app;
pub mod commands;
pub mod config;
