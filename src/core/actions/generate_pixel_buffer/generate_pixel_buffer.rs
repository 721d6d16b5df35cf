use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

/// Generates a pixel buffer by mapping input values to colours.
///
/// The input is consumed; the mapping runs in parallel but keeps row-major
/// order. Fails if `input` does not hold exactly one value per pixel.
pub fn generate_pixel_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    image_size: ImageSize,
) -> Result<PixelBuffer, PixelBufferError>
where
    T: Send,
    CMap: ColourMap<T> + Sync,
{
    let buffer: PixelBufferData = input
        .into_par_iter()
        .flat_map_iter(|value| {
            let Colour { r, g, b } = mapper.map(value);
            [r, g, b]
        })
        .collect();

    PixelBuffer::from_data(image_size, buffer)
}
