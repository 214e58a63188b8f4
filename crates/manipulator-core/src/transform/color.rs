//! Per-pixel color transforms.
//!
//! Both operations rewrite the owned buffer in place and hand it back;
//! dimensions never change.

use crate::luminance::calculate_luma_u8;
use crate::pixel::{PixelBuffer, Rgb};

/// Replace every channel `c` with `255 - c` (a photographic negative).
pub fn invert(mut image: PixelBuffer) -> PixelBuffer {
    for px in image.pixels_mut() {
        *px = Rgb::new(255 - px.red, 255 - px.green, 255 - px.blue);
    }
    image
}

/// Set every pixel to its luma, `floor(0.3R + 0.59G + 0.11B)`, on all
/// three channels.
pub fn grayscale(mut image: PixelBuffer) -> PixelBuffer {
    for px in image.pixels_mut() {
        *px = Rgb::gray(calculate_luma_u8(px.red, px.green, px.blue));
    }
    image
}
