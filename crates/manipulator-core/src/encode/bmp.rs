//! 24-bit BMP encoding for export.
//!
//! Rows are written bottom-to-top, each pixel as `B, G, R`, each row padded
//! with zero bytes to a multiple of four. Resolution and palette fields are
//! left zero, which every BMP reader accepts.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::bmp::{self, BmpHeader, HEADER_SIZE};
use crate::pixel::PixelBuffer;

/// Errors that can occur during BMP encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Dimensions or file size do not fit the 32-bit header fields.
    #[error("Image too large to encode as BMP: {width}x{height}")]
    ImageTooLarge { width: usize, height: usize },

    /// Writing to the destination failed.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Encode a buffer to BMP bytes.
///
/// # Example
///
/// ```ignore
/// use manipulator_core::encode::encode_bmp;
/// use manipulator_core::PixelBuffer;
///
/// let bmp = encode_bmp(&PixelBuffer::new(2, 2)).unwrap();
/// assert_eq!(&bmp[0..2], b"BM");
/// assert_eq!(bmp.len(), 54 + 8 * 2);
/// ```
pub fn encode_bmp(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    let header = build_header(image)?;
    let mut out = Vec::with_capacity(header.file_size as usize);
    write_image(image, &header, &mut out)?;
    Ok(out)
}

/// Encode a buffer as BMP into any writer.
pub fn encode_bmp_to_writer<W: Write>(
    image: &PixelBuffer,
    mut writer: W,
) -> Result<(), EncodeError> {
    let header = build_header(image)?;
    write_image(image, &header, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode a buffer and write it to `path`, replacing any existing file.
pub fn encode_bmp_file(image: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    // Validate before touching the file system so a failure leaves no stub.
    build_header(image)?;
    debug!("Encoding {}", path.display());
    let file = File::create(path)?;
    encode_bmp_to_writer(image, BufWriter::new(file))
}

fn build_header(image: &PixelBuffer) -> Result<BmpHeader, EncodeError> {
    let (width, height) = image.dimensions();
    let too_large = || EncodeError::ImageTooLarge { width, height };

    let w = i32::try_from(width).map_err(|_| too_large())?;
    let h = i32::try_from(height).map_err(|_| too_large())?;
    let image_size = bmp::row_stride(width)
        .checked_mul(height)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| n.checked_add(HEADER_SIZE as u32).is_some())
        .ok_or_else(too_large)?;

    Ok(BmpHeader::for_image(w, h, image_size))
}

fn write_image<W: Write>(image: &PixelBuffer, header: &BmpHeader, out: &mut W) -> io::Result<()> {
    let padding = bmp::row_padding(image.width());
    debug!(
        "BMP encode: {}x{}, padding {}, file size {}",
        image.width(),
        image.height(),
        padding,
        header.file_size
    );

    out.write_all(&header.to_bytes())?;

    let pad = [0u8; 3];
    let mut row_bytes = Vec::with_capacity(bmp::row_stride(image.width()));
    for row in image.rows().iter().rev() {
        row_bytes.clear();
        for px in row {
            row_bytes.extend_from_slice(&[px.blue, px.green, px.red]);
        }
        row_bytes.extend_from_slice(&pad[..padding]);
        out.write_all(&row_bytes)?;
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
