//! Lossless geometric transforms: vertical mirror and 90° rotation.

use crate::pixel::PixelBuffer;

/// Flip the image upside down by swapping row `i` with row `height - 1 - i`.
pub fn vertical_mirror(mut image: PixelBuffer) -> PixelBuffer {
    let height = image.height();
    for y in 0..height / 2 {
        image.swap_rows(y, height - 1 - y);
    }
    image
}

/// Rotate 90° clockwise.
///
/// The output is `height` wide and `width` tall. Source pixel at row `i`,
/// column `j` lands at row `j`, column `height - 1 - i`.
///
/// # Example
///
/// ```ignore
/// use manipulator_core::{PixelBuffer, Rgb};
/// use manipulator_core::transform::rotate_right;
///
/// let img = PixelBuffer::from_fn(3, 1, |x, _| Rgb::gray(x as u8));
/// let rotated = rotate_right(img);
/// assert_eq!(rotated.dimensions(), (1, 3));
/// assert_eq!(rotated.get(0, 2), Some(Rgb::gray(2)));
/// ```
pub fn rotate_right(image: PixelBuffer) -> PixelBuffer {
    let (width, height) = image.dimensions();
    let rows = (0..width)
        .map(|j| {
            (0..height)
                .map(|col| image.rows()[height - 1 - col][j])
                .collect()
        })
        .collect();
    PixelBuffer::from_parts(height, width, rows)
}
