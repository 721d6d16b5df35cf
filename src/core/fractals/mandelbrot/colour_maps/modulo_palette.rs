use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

const CHANNEL_MODULUS: u64 = 255;
const RED_STEP: u64 = 9;
const GREEN_STEP: u64 = 7;
const BLUE_STEP: u64 = 5;

fn channel(iterations: u32, step: u64) -> u8 {
    // < 255 after the modulus, so the narrowing is lossless
    ((u64::from(iterations) * step) % CHANNEL_MODULUS) as u8
}

/// Cycles each channel at a different rate: `(9n, 7n, 5n) mod 255`.
///
/// Points that never escaped get whatever the formula yields for the
/// iteration budget; there is no dedicated interior colour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MandelbrotModuloPalette;

impl MandelbrotModuloPalette {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ColourMap<u32> for MandelbrotModuloPalette {
    fn map(&self, iterations: u32) -> Colour {
        Colour {
            r: channel(iterations, RED_STEP),
            g: channel(iterations, GREEN_STEP),
            b: channel(iterations, BLUE_STEP),
        }
    }

    fn display_name(&self) -> &str {
        "Modulo palette"
    }
}
