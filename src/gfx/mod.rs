//! Software rasterizer - everything that writes pixels.
//!
//! ## Components
//!
//! - **Font**: static 12×16 glyph atlas
//! - **FrameBuffer**: owned RGB565 pixel grid, an `embedded-graphics`
//!   draw target
//! - **Primitives**: rectangle fill, glyph/text blit, bevel borders
//!
//! Colours are given as 24-bit RGB (`0xRRGGBB`) and packed to RGB565 on
//! every write.

pub mod draw;
pub mod font;
pub mod framebuffer;

pub use draw::{text_width, Bevel};
pub use framebuffer::FrameBuffer;

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;

/// Pack a `0xRRGGBB` colour into RGB565.
///
/// Lossy: the low 3/2/3 bits of red/green/blue are truncated, so every
/// channel keeps its own bit range and never bleeds into a neighbour.
pub fn rgb888_to_rgb565(rgb: u32) -> Rgb565 {
    let c = Rgb888::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8);
    Rgb565::new(c.r() >> 3, c.g() >> 2, c.b() >> 3)
}

/// Packed 16-bit cell value for a `0xRRGGBB` colour.
pub fn pack(rgb: u32) -> u16 {
    rgb888_to_rgb565(rgb).into_storage()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_land_in_their_own_channel() {
        assert_eq!(pack(0xFF0000), 0xF800);
        assert_eq!(pack(0x00FF00), 0x07E0);
        assert_eq!(pack(0x0000FF), 0x001F);
        assert_eq!(pack(0xFFFFFF), 0xFFFF);
        assert_eq!(pack(0x000000), 0x0000);
    }

    #[test]
    fn secondaries_combine_channels() {
        assert_eq!(pack(0xFFFF00), 0xF800 | 0x07E0);
        assert_eq!(pack(0x00FFFF), 0x07E0 | 0x001F);
        assert_eq!(pack(0xFF00FF), 0xF800 | 0x001F);
    }

    #[test]
    fn packing_truncates_low_bits() {
        // 0x07 red, 0x03 green, 0x07 blue all fall below one RGB565 step.
        assert_eq!(pack(0x070307), 0x0000);
        assert_eq!(pack(0x080408), 0b00001_000001_00001);
    }

    #[test]
    fn palette_values_pack_as_expected() {
        // 0x9CA0A0: r=0x9C>>3=19, g=0xA0>>2=40, b=0xA0>>3=20
        assert_eq!(pack(0x9CA0A0), (19 << 11) | (40 << 5) | 20);
        let c = rgb888_to_rgb565(0x0078D4);
        assert_eq!((c.r(), c.g(), c.b()), (0, 0x78 >> 2, 0xD4 >> 3));
    }
}
