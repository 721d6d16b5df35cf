//! Input adapters.
//!
//! Receive input from the outside world and translate it into render
//! requests for the controllers.

pub mod gui;
