pub mod generate_fractal;
pub mod generate_fractal_tiled_rayon;
pub mod ports;
