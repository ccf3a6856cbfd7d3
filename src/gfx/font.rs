//! Bitmap font atlas.
//!
//! One glyph is `FONT_WIDTH × FONT_HEIGHT` pixels. Each row is packed into a
//! `u16`, MSB-first: column `c` is set when `row & (LEFTMOST_COLUMN >> c)`
//! is non-zero.
//!
//! The table is built at compile time from the public-domain 8×8 basic set
//! in `font8x8`, scaled by nearest neighbour to the 12×16 cell the badge
//! layout was designed around.

use font8x8::legacy::BASIC_LEGACY;

/// Glyph cell width (pixels). Also the pen advance per character.
pub const FONT_WIDTH: i32 = 12;

/// Glyph cell height (pixels).
pub const FONT_HEIGHT: i32 = 16;

/// First and last characters with a glyph.
pub const FIRST_CHAR: char = ' ';
pub const LAST_CHAR: char = '~';

/// Bit for column 0 of a packed row.
pub const LEFTMOST_COLUMN: u16 = 1 << (FONT_WIDTH - 1);

const SOURCE_SIZE: usize = 8;
const GLYPH_COUNT: usize = LAST_CHAR as usize - FIRST_CHAR as usize + 1;

/// Packed rows of one glyph.
pub type Glyph = [u16; FONT_HEIGHT as usize];

/// The atlas, indexed by `char - FIRST_CHAR`.
pub static PIXEL_FONT: [Glyph; GLYPH_COUNT] = build_atlas();

/// Look up the glyph for `c`, or `None` outside `FIRST_CHAR..=LAST_CHAR`.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    if !(FIRST_CHAR..=LAST_CHAR).contains(&c) {
        return None;
    }
    PIXEL_FONT.get(c as usize - FIRST_CHAR as usize)
}

const fn build_atlas() -> [Glyph; GLYPH_COUNT] {
    let mut atlas = [[0u16; FONT_HEIGHT as usize]; GLYPH_COUNT];
    let mut i = 0;
    while i < GLYPH_COUNT {
        atlas[i] = scale_glyph(&BASIC_LEGACY[FIRST_CHAR as usize + i]);
        i += 1;
    }
    atlas
}

// font8x8 stores the leftmost pixel in bit 0.
const fn scale_glyph(src: &[u8; SOURCE_SIZE]) -> Glyph {
    let mut out = [0u16; FONT_HEIGHT as usize];
    let mut row = 0;
    while row < FONT_HEIGHT as usize {
        let bits = src[row * SOURCE_SIZE / FONT_HEIGHT as usize];
        let mut packed = 0u16;
        let mut col = 0;
        while col < FONT_WIDTH as usize {
            let src_col = col * SOURCE_SIZE / FONT_WIDTH as usize;
            if bits & (1 << src_col) != 0 {
                packed |= LEFTMOST_COLUMN >> col;
            }
            col += 1;
        }
        out[row] = packed;
        row += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_range_is_printable_ascii() {
        assert!(glyph(' ').is_some());
        assert!(glyph('~').is_some());
        assert!(glyph('\u{1f}').is_none());
        assert!(glyph('\u{7f}').is_none());
        assert!(glyph('é').is_none());
    }

    #[test]
    fn space_is_blank_and_letters_are_not() {
        assert!(glyph(' ').unwrap().iter().all(|&row| row == 0));
        assert!(glyph('A').unwrap().iter().any(|&row| row != 0));
        assert!(glyph('0').unwrap().iter().any(|&row| row != 0));
    }

    #[test]
    fn rows_never_use_bits_past_the_cell() {
        let mask = !((1u16 << FONT_WIDTH) - 1);
        for glyph in PIXEL_FONT.iter() {
            for &row in glyph.iter() {
                assert_eq!(row & mask, 0);
            }
        }
    }

    #[test]
    fn vertical_scaling_doubles_source_rows() {
        for glyph in PIXEL_FONT.iter() {
            for pair in glyph.chunks_exact(2) {
                assert_eq!(pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn full_source_row_fills_the_whole_cell() {
        // The underscore's bottom row is solid in the 8×8 set.
        let underscore = glyph('_').unwrap();
        let full = (1u16 << FONT_WIDTH) - 1;
        assert_eq!(underscore[FONT_HEIGHT as usize - 1], full);
        assert_eq!(underscore[FONT_HEIGHT as usize - 2], full);
        assert_eq!(underscore[0], 0);
    }
}
