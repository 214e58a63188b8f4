//! Integer-factor resizing: 2x box downsample and 2x pixel replication.

use crate::pixel::{PixelBuffer, Rgb};

/// Halve both dimensions, averaging each 2x2 block.
///
/// Odd trailing rows and columns are dropped. Channel averages truncate.
pub fn shrink(image: PixelBuffer) -> PixelBuffer {
    let (new_w, new_h) = (image.width() / 2, image.height() / 2);
    let src = image.rows();
    let rows = (0..new_h)
        .map(|y| {
            (0..new_w)
                .map(|x| {
                    let block = [
                        src[2 * y][2 * x],
                        src[2 * y][2 * x + 1],
                        src[2 * y + 1][2 * x],
                        src[2 * y + 1][2 * x + 1],
                    ];
                    average(&block)
                })
                .collect()
        })
        .collect();
    PixelBuffer::from_parts(new_w, new_h, rows)
}

/// Double both dimensions, copying each pixel into a 2x2 block.
pub fn double_size(image: PixelBuffer) -> PixelBuffer {
    let (width, height) = image.dimensions();
    let mut rows = Vec::with_capacity(height * 2);
    for row in image.into_rows() {
        let wide: Vec<Rgb> = row.iter().flat_map(|&px| [px, px]).collect();
        rows.push(wide.clone());
        rows.push(wide);
    }
    PixelBuffer::from_parts(width * 2, height * 2, rows)
}

/// Per-channel truncating mean. `pixels` must be non-empty.
pub(crate) fn average(pixels: &[Rgb]) -> Rgb {
    let n = pixels.len() as u32;
    let (r, g, b) = pixels.iter().fold((0u32, 0u32, 0u32), |(r, g, b), px| {
        (r + px.red as u32, g + px.green as u32, b + px.blue as u32)
    });
    Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
}
