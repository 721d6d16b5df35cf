use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Single-threaded row-major scan over the whole image.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    image_size: ImageSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let width = image_size.width() as i32;
    let height = image_size.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
