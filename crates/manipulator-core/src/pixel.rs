//! In-memory pixel data model.
//!
//! A [`PixelBuffer`] is a rectangular grid of [`Rgb`] values stored
//! top-to-bottom, left-to-right. It performs no file I/O; see
//! [`crate::decode`] and [`crate::encode`] for that.
//!
//! # Coordinate System
//!
//! - `x` is the column (0 = left edge), `y` is the row (0 = top edge)
//! - Rows are stored in display order regardless of the on-disk order

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single 24-bit color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a gray value with all three channels equal.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Channels in memory order `[red, green, blue]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

/// Error returned when rows handed to [`PixelBuffer::from_rows`] are not rectangular.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Ragged pixel rows: row {row} has {actual} pixels, expected {expected}")]
pub struct ShapeError {
    pub row: usize,
    pub expected: usize,
    pub actual: usize,
}

/// A rectangular grid of RGB pixels.
///
/// The buffer always holds exactly `height` rows of exactly `width` pixels.
/// Fields are private so that invariant cannot be broken from outside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    rows: Vec<Vec<Rgb>>,
}

impl PixelBuffer {
    /// Create a black buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create a buffer with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![color; width]; height],
        }
    }

    /// Build a buffer by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        let rows = (0..height)
            .map(|y| (0..width).map(|x| f(x, y)).collect())
            .collect();
        Self {
            width,
            height,
            rows,
        }
    }

    /// Build a buffer from top-to-bottom rows.
    ///
    /// The width is taken from the first row; an empty vector yields a 0x0
    /// buffer.
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> Result<Self, ShapeError> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ShapeError {
                row,
                expected: width,
                actual: r.len(),
            });
        }
        Ok(Self {
            width,
            height: rows.len(),
            rows,
        })
    }

    /// Assemble a buffer whose shape the caller has already established.
    pub(crate) fn from_parts(width: usize, height: usize, rows: Vec<Vec<Rgb>>) -> Self {
        debug_assert_eq!(rows.len(), height, "Row count mismatch");
        debug_assert!(rows.iter().all(|r| r.len() == width), "Ragged rows");
        Self {
            width,
            height,
            rows,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// True if the buffer has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel at column `x`, row `y`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Overwrite the pixel at `(x, y)`. Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(px) => {
                *px = color;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, y: usize) -> Option<&[Rgb]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> &[Vec<Rgb>] {
        &self.rows
    }

    /// Swap two rows in place.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Mutable iteration over all pixels in row-major order.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Rgb> + '_ {
        self.rows.iter_mut().flat_map(|row| row.iter_mut())
    }

    pub fn into_rows(self) -> Vec<Vec<Rgb>> {
        self.rows
    }

    /// Flatten to packed RGB bytes (3 bytes per pixel, row-major order).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixel_count() * 3);
        for px in self.pixels() {
            bytes.extend_from_slice(&px.to_array());
        }
        bytes
    }
}
