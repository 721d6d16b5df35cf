pub mod calculate_tiles_in_image;
pub mod pixel_to_complex_coords;
