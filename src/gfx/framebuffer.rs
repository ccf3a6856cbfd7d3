//! In-memory RGB565 frame buffer.

use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::error::Error;

/// Row-major grid of packed RGB565 cells.
///
/// Size is fixed at construction. Every write is bounds-checked; nothing
/// outside `[0, width) × [0, height)` is ever touched.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u16>,
}

impl FrameBuffer {
    /// Allocate a black buffer of `width × height` cells.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let width = width as usize;
        let height = height as usize;
        let len = width.checked_mul(height).ok_or(Error::FrameBufferAlloc)?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| Error::FrameBufferAlloc)?;
        pixels.resize(len, 0);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row, as texture uploads expect it.
    pub fn pitch(&self) -> usize {
        self.width * core::mem::size_of::<u16>()
    }

    /// All cells, row-major.
    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    /// Write packed cells as native-endian bytes into `out`.
    ///
    /// `out` must hold at least `height * pitch` bytes; any excess is left
    /// untouched. Returns the number of bytes written.
    pub fn copy_to_bytes(&self, out: &mut [u8]) -> usize {
        let mut written = 0;
        for (cell, chunk) in self.pixels.iter().zip(out.chunks_exact_mut(2)) {
            chunk.copy_from_slice(&cell.to_ne_bytes());
            written += 2;
        }
        written
    }

    /// Read one cell.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u16> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one cell. Returns `false` (and writes nothing) when out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, raw: u16) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = raw;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with one packed value.
    pub fn fill(&mut self, raw: u16) {
        self.pixels.fill(raw);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.into_storage());
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }

        let raw = color.into_storage();
        let x0 = area.top_left.x as usize;
        let x1 = x0 + area.size.width as usize;
        for y in area.rows() {
            let row = y as usize * self.width;
            self.pixels[row + x0..row + x1].fill(raw);
        }

        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
