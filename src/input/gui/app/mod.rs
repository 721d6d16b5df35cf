pub mod events;
pub mod gui_app;
pub mod ports;
pub mod state;
pub mod zoom_cooldown;
pub mod zoom_input;
