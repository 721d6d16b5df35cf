//! Port definitions for the interactive controller.
//!
//! Traits the controller talks through to reach the presentation layer.

pub mod presenter;
