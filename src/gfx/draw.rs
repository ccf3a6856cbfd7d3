//! Drawing primitives on top of [`FrameBuffer`].
//!
//! Coordinates are signed; anything outside the buffer is clipped. Colours
//! are `0xRRGGBB`.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::font::{self, FONT_WIDTH, LEFTMOST_COLUMN};
use super::{pack, FrameBuffer};
use crate::config::{BEVEL, BORDER_DARK, BORDER_LIGHT};

/// Relief of a [`FrameBuffer::draw_3d_border`] outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bevel {
    /// Light top/left, dark bottom/right.
    Raised,
    /// Dark top/left, light bottom/right.
    Sunken,
}

/// Pixel width of `text`: one glyph cell per character, including
/// characters the atlas has no glyph for.
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * FONT_WIDTH
}

impl FrameBuffer {
    /// Fill `w × h` cells starting at `(x, y)`.
    ///
    /// The far edges are clipped to the buffer size and the near edges
    /// clamped to zero; a rectangle entirely outside is a no-op.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let x2 = x.saturating_add(w).min(self.width() as i32);
        let y2 = y.saturating_add(h).min(self.height() as i32);
        let x = x.max(0);
        let y = y.max(0);
        if x2 <= x || y2 <= y {
            return;
        }

        let area = Rectangle::with_corners(Point::new(x, y), Point::new(x2 - 1, y2 - 1));
        let _ = self.fill_solid(&area, super::rgb888_to_rgb565(color));
    }

    /// Blit one glyph with its top-left corner at `(x, y)`.
    ///
    /// Characters outside the atlas draw nothing. Only set bits are
    /// written, so the background shows through.
    pub fn draw_glyph(&mut self, x: i32, y: i32, c: char, color: u32) {
        let Some(glyph) = font::glyph(c) else {
            return;
        };
        let raw = pack(color);

        for (row, &bits) in glyph.iter().enumerate() {
            let py = y + row as i32;
            if py < 0 || py >= self.height() as i32 {
                continue;
            }

            for col in 0..FONT_WIDTH {
                if bits & (LEFTMOST_COLUMN >> col) != 0 {
                    self.set_pixel(x + col, py, raw);
                }
            }
        }
    }

    /// Draw `text` left to right on one line. No wrapping.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: u32) {
        let mut pen_x = x;
        for c in text.chars() {
            self.draw_glyph(pen_x, y, c, color);
            pen_x += FONT_WIDTH;
        }
    }

    /// Faux bold: the text drawn twice, one pixel apart horizontally.
    pub fn draw_text_bold(&mut self, x: i32, y: i32, text: &str, color: u32) {
        self.draw_text(x, y, text, color);
        self.draw_text(x + 1, y, text, color);
    }

    /// Centre `text` horizontally in `width` pixels starting at `x`.
    pub fn draw_text_centered(&mut self, x: i32, y: i32, width: i32, text: &str, color: u32) {
        let text_x = x + (width - text_width(text)) / 2;
        self.draw_text(text_x, y, text, color);
    }

    /// Outline `w × h` at `(x, y)` with a [`BEVEL`]-thick two-tone edge.
    pub fn draw_3d_border(&mut self, x: i32, y: i32, w: i32, h: i32, bevel: Bevel) {
        let (light, dark) = match bevel {
            Bevel::Raised => (BORDER_LIGHT, BORDER_DARK),
            Bevel::Sunken => (BORDER_DARK, BORDER_LIGHT),
        };

        self.fill_rect(x, y, w, BEVEL, light);
        self.fill_rect(x, y, BEVEL, h, light);

        self.fill_rect(x, y + h - BEVEL, w, BEVEL, dark);
        self.fill_rect(x + w - BEVEL, y, BEVEL, h, dark);
    }
}
