pub mod zoom_viewport;
