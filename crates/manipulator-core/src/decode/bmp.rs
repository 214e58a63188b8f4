//! 24-bit uncompressed BMP decoding.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::{debug, trace};

use super::DecodeError;
use crate::bmp::{self, BmpHeader, HEADER_SIZE};
use crate::pixel::{PixelBuffer, Rgb};

/// Largest width or height the decoder accepts.
pub const MAX_DIMENSION: u32 = 1 << 18;

/// Largest total pixel count the decoder accepts (about 268 megapixels).
pub const MAX_PIXELS: u64 = 1 << 28;

/// Decode a BMP image held in memory.
///
/// # Errors
///
/// - `DecodeError::UnsupportedFormat` for anything but 24-bit uncompressed BMP
/// - `DecodeError::CorruptedFile` for impossible header values
/// - `DecodeError::IoError` if the data ends before the declared pixel rows
pub fn decode_bmp(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    decode_bmp_from_reader(bytes)
}

/// Open and decode a BMP file.
pub fn decode_bmp_file(path: impl AsRef<Path>) -> Result<PixelBuffer, DecodeError> {
    let path = path.as_ref();
    debug!("Decoding {}", path.display());
    let file = File::open(path)?;
    decode_bmp_from_reader(BufReader::new(file))
}

/// Decode a BMP image from any byte stream.
///
/// The reader is consumed up to the end of the last pixel row; trailing
/// bytes are left unread.
pub fn decode_bmp_from_reader<R: Read>(mut reader: R) -> Result<PixelBuffer, DecodeError> {
    let mut raw = [0u8; HEADER_SIZE];
    reader.read_exact(&mut raw)?;
    let header = BmpHeader::parse(&raw);
    validate_header(&header)?;

    let width = header.width as usize;
    let height = header.height.unsigned_abs() as usize;
    let stride = bmp::row_stride(width);
    let padding = bmp::row_padding(width);
    debug!(
        "BMP header: {}x{}, stride {} (padding {}), pixel offset {}, {}",
        width,
        height,
        stride,
        padding,
        header.pixel_offset,
        if header.is_top_down() { "top-down" } else { "bottom-up" }
    );

    let extra = u64::from(header.pixel_offset) - HEADER_SIZE as u64;
    if extra > 0 {
        trace!("Skipping {} bytes of extended header", extra);
        skip_exact(&mut reader, extra)?;
    }

    let mut rows = Vec::new();
    let mut row_bytes = Vec::with_capacity(width.min(4096) * 3);
    for file_row in 0..height {
        read_row(&mut reader, width * 3, &mut row_bytes)?;
        rows.push(
            row_bytes
                .chunks_exact(3)
                .map(|bgr| Rgb::new(bgr[2], bgr[1], bgr[0]))
                .collect::<Vec<_>>(),
        );

        // Writers commonly drop the final row's padding; tolerate that.
        if file_row + 1 == height {
            skip_up_to(&mut reader, padding as u64)?;
        } else {
            skip_exact(&mut reader, padding as u64)?;
        }
    }

    if !header.is_top_down() {
        rows.reverse();
    }

    Ok(PixelBuffer::from_parts(width, height, rows))
}

fn validate_header(header: &BmpHeader) -> Result<(), DecodeError> {
    if header.signature != bmp::SIGNATURE {
        return Err(DecodeError::UnsupportedFormat(format!(
            "bad signature {:02X} {:02X}, expected \"BM\"",
            header.signature[0], header.signature[1]
        )));
    }
    if header.bits_per_pixel != bmp::BITS_PER_PIXEL {
        return Err(DecodeError::UnsupportedFormat(format!(
            "{} bits per pixel, only 24-bit bitmaps are supported",
            header.bits_per_pixel
        )));
    }
    if header.compression != bmp::COMPRESSION_NONE {
        return Err(DecodeError::UnsupportedFormat(format!(
            "compression type {}, only uncompressed bitmaps are supported",
            header.compression
        )));
    }
    if header.width < 0 {
        return Err(DecodeError::CorruptedFile(format!(
            "negative width {}",
            header.width
        )));
    }
    if (header.pixel_offset as usize) < HEADER_SIZE {
        return Err(DecodeError::CorruptedFile(format!(
            "pixel data offset {} lies inside the header",
            header.pixel_offset
        )));
    }

    let width = header.width as u32;
    let height = header.height.unsigned_abs();
    if width > MAX_DIMENSION
        || height > MAX_DIMENSION
        || u64::from(width) * u64::from(height) > MAX_PIXELS
    {
        return Err(DecodeError::ImageTooLarge { width, height });
    }
    Ok(())
}

/// Fill `buf` with exactly `len` bytes.
///
/// Grows with the data actually read so a lying header cannot force a huge
/// allocation up front.
fn read_row<R: Read>(reader: &mut R, len: usize, buf: &mut Vec<u8>) -> io::Result<()> {
    buf.clear();
    reader.by_ref().take(len as u64).read_to_end(buf)?;
    if buf.len() < len {
        return Err(unexpected_eof(format!(
            "pixel row ended after {} of {} bytes",
            buf.len(),
            len
        )));
    }
    Ok(())
}

fn skip_exact<R: Read>(reader: &mut R, count: u64) -> io::Result<()> {
    let skipped = skip_up_to(reader, count)?;
    if skipped < count {
        return Err(unexpected_eof(format!(
            "expected {} bytes to skip, found {}",
            count, skipped
        )));
    }
    Ok(())
}

fn skip_up_to<R: Read>(reader: &mut R, count: u64) -> io::Result<u64> {
    io::copy(&mut reader.by_ref().take(count), &mut io::sink())
}

fn unexpected_eof(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assemble a BMP by hand from bottom-up rows of BGR bytes.
    fn build_bmp(width: i32, height: i32, offset: u32, rows: &[&[u8]]) -> Vec<u8> {
        let data_len: usize = rows.iter().map(|r| r.len()).sum();
        let mut header = BmpHeader::for_image(width, height, data_len as u32);
        header.pixel_offset = offset;
        let mut out = header.to_bytes().to_vec();
        out.resize(offset as usize, 0xEE);
        for row in rows {
            out.extend_from_slice(row);
        }
        out
    }

    #[test]
    fn test_decode_2x2_bottom_up() {
        // Bottom row first: blue, white; then top row: red, green.
        let bytes = build_bmp(
            2,
            2,
            54,
            &[
                &[255, 0, 0, 255, 255, 255, 0, 0],
                &[0, 0, 255, 0, 255, 0, 0, 0],
            ],
        );
        let img = decode_bmp(&bytes).unwrap();

        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(img.get(1, 0), Some(Rgb::new(0, 255, 0)));
        assert_eq!(img.get(0, 1), Some(Rgb::new(0, 0, 255)));
        assert_eq!(img.get(1, 1), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_decode_image_crate_output() {
        // Odd width so every row carries padding.
        let (width, height) = (5u32, 3u32);
        let source = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 50) as u8, (y * 90) as u8, (x * 7 + y * 11) as u8])
        });
        let mut cursor = io::Cursor::new(Vec::new());
        source
            .write_to(&mut cursor, image::ImageFormat::Bmp)
            .unwrap();
        let bytes = cursor.into_inner();

        let img = decode_bmp(&bytes).unwrap();
        assert_eq!(img.dimensions(), (width as usize, height as usize));
        for (x, y, px) in source.enumerate_pixels() {
            assert_eq!(
                img.get(x as usize, y as usize),
                Some(Rgb::from(px.0)),
                "pixel ({}, {})",
                x,
                y
            );
        }
    }

    #[test]
    fn test_decode_top_down() {
        let bytes = build_bmp(1, -2, 54, &[&[0, 0, 255, 0], &[255, 0, 0, 0]]);
        let img = decode_bmp(&bytes).unwrap();

        assert_eq!(img.dimensions(), (1, 2));
        assert_eq!(img.get(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(img.get(0, 1), Some(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_decode_skips_extended_header() {
        // A 124-byte BITMAPV5HEADER pushes the pixels to offset 138.
        let bytes = build_bmp(1, 1, 138, &[&[10, 20, 30, 0]]);
        let img = decode_bmp(&bytes).unwrap();
        assert_eq!(img.get(0, 0), Some(Rgb::new(30, 20, 10)));
    }

    #[test]
    fn test_decode_padding_is_discarded() {
        // Width 1 => 3 pixel bytes + 1 padding byte per row. Padding bytes
        // are garbage and must not leak into the next row.
        let bytes = build_bmp(1, 2, 54, &[&[1, 2, 3, 0xAA], &[4, 5, 6, 0xBB]]);
        let img = decode_bmp(&bytes).unwrap();
        assert_eq!(img.get(0, 0), Some(Rgb::new(6, 5, 4)));
        assert_eq!(img.get(0, 1), Some(Rgb::new(3, 2, 1)));
    }

    #[test]
    fn test_decode_missing_final_padding_is_tolerated() {
        let bytes = build_bmp(1, 2, 54, &[&[1, 2, 3, 0], &[4, 5, 6]]);
        let img = decode_bmp(&bytes).unwrap();
        assert_eq!(img.get(0, 0), Some(Rgb::new(6, 5, 4)));
    }

    #[test]
    fn test_decode_rejects_8_bit() {
        let mut bytes = build_bmp(1, 1, 54, &[&[0, 0, 0, 0]]);
        bytes[28..30].copy_from_slice(&8u16.to_le_bytes());

        match decode_bmp(&bytes) {
            Err(DecodeError::UnsupportedFormat(msg)) => assert!(msg.contains("8 bits")),
            other => panic!("Expected UnsupportedFormat, got: {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_bad_signature() {
        let mut bytes = build_bmp(1, 1, 54, &[&[0, 0, 0, 0]]);
        bytes[0] = b'P';
        assert!(matches!(
            decode_bmp(&bytes),
            Err(DecodeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_compression() {
        let mut bytes = build_bmp(1, 1, 54, &[&[0, 0, 0, 0]]);
        bytes[30..34].copy_from_slice(&1u32.to_le_bytes());
        assert!(matches!(
            decode_bmp(&bytes),
            Err(DecodeError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_decode_rejects_negative_width() {
        let bytes = build_bmp(-1, 1, 54, &[&[0, 0, 0, 0]]);
        assert!(matches!(
            decode_bmp(&bytes),
            Err(DecodeError::CorruptedFile(_))
        ));
    }

    #[test]
    fn test_decode_rejects_offset_inside_header() {
        let mut bytes = build_bmp(1, 1, 54, &[&[0, 0, 0, 0]]);
        bytes[10..14].copy_from_slice(&20u32.to_le_bytes());
        assert!(matches!(
            decode_bmp(&bytes),
            Err(DecodeError::CorruptedFile(_))
        ));
    }

    #[test]
    fn test_decode_rejects_huge_dimensions() {
        let bytes = build_bmp(100_000, 100_000, 54, &[]);
        assert!(matches!(
            decode_bmp(&bytes),
            Err(DecodeError::ImageTooLarge {
                width: 100_000,
                height: 100_000
            })
        ));
    }

    #[test]
    fn test_decode_truncated_header() {
        let err = decode_bmp(&[b'B', b'M', 0, 0]).unwrap_err();
        assert!(err.is_truncated(), "got {:?}", err);
    }

    #[test]
    fn test_decode_truncated_pixels() {
        let bytes = build_bmp(2, 2, 54, &[&[0, 0, 0, 0, 0, 0, 0, 0], &[1, 2]]);
        let err = decode_bmp(&bytes).unwrap_err();
        assert!(err.is_truncated(), "got {:?}", err);
    }

    #[test]
    fn test_decode_truncated_extended_header() {
        let mut bytes = BmpHeader::for_image(1, 1, 4).to_bytes().to_vec();
        bytes[10..14].copy_from_slice(&200u32.to_le_bytes());
        bytes.extend_from_slice(&[0; 10]);
        assert!(decode_bmp(&bytes).unwrap_err().is_truncated());
    }

    #[test]
    fn test_decode_empty_image() {
        let bytes = build_bmp(0, 0, 54, &[]);
        let img = decode_bmp(&bytes).unwrap();
        assert!(img.is_empty());
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let bytes = build_bmp(1, 1, 54, &[&[1, 2, 3, 0], &[9, 9, 9, 9, 9]]);
        let img = decode_bmp(&bytes).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
        assert_eq!(img.get(0, 0), Some(Rgb::new(3, 2, 1)));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_bmp_file(dir.path().join("nope.bmp")).unwrap_err();
        match err {
            DecodeError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("Expected IoError, got: {:?}", other),
        }
    }

    #[test]
    fn test_decode_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.bmp");
        std::fs::write(&path, build_bmp(1, 1, 54, &[&[7, 8, 9, 0]])).unwrap();

        let img = decode_bmp_file(&path).unwrap();
        assert_eq!(img.get(0, 0), Some(Rgb::new(9, 8, 7)));
    }
}
