//! 3x3 box blur.
//!
//! Every output pixel is the truncating mean of the in-bounds pixels in the
//! 3x3 window centred on it: 9 in the interior, 6 along an edge, 4 in a
//! corner. Reads always come from the unmodified source.

use super::resample::average;
use crate::pixel::{PixelBuffer, Rgb};

/// Relative `(dx, dy)` offsets of the 3x3 window, centre included.
const WINDOW: [(isize, isize); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Blur the image with a 3x3 box filter.
pub fn blur(image: PixelBuffer) -> PixelBuffer {
    let (width, height) = image.dimensions();
    let mut window = Vec::with_capacity(WINDOW.len());
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    window.clear();
                    window.extend(WINDOW.iter().filter_map(|&(dx, dy)| {
                        let nx = x.checked_add_signed(dx)?;
                        let ny = y.checked_add_signed(dy)?;
                        image.get(nx, ny)
                    }));
                    average(&window)
                })
                .collect::<Vec<Rgb>>()
        })
        .collect();
    PixelBuffer::from_parts(width, height, rows)
}
