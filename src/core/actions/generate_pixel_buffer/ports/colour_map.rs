use crate::core::data::colour::Colour;

/// Maps a computed per-pixel value to a colour. Total over its input type.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
