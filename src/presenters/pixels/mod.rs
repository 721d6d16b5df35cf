pub mod adapter;
pub mod factory;
mod frame_tracker;
pub mod presenter;
