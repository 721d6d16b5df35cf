use crate::core::data::image_size::ImageSize;
use std::num::NonZeroU32;

/// Edge length of the square tiles the kernel is dispatched over.
pub const DEFAULT_TILE_SIZE: NonZeroU32 = match NonZeroU32::new(16) {
    Some(size) => size,
    None => unreachable!(),
};

/// Number of tile columns and rows needed to cover the whole image.
///
/// Rounds up, so edge tiles may hang past the right and bottom of the image.
#[must_use]
pub fn calculate_tiles_in_image(tile_size: NonZeroU32, image_size: ImageSize) -> (u32, u32) {
    (
        image_size.width().div_ceil(tile_size.get()),
        image_size.height().div_ceil(tile_size.get()),
    )
}
