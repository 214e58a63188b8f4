//! BMP header layout shared by the decoder and encoder.
//!
//! Only the classic 54-byte layout is modelled: a 14-byte file header
//! followed by a 40-byte `BITMAPINFOHEADER`. Larger DIB headers are
//! accepted on read by skipping to the declared pixel offset.
//!
//! ```text
//! offset  size  field
//!      0     2  signature "BM"
//!      2     4  file size
//!      6     4  reserved
//!     10     4  pixel data offset
//!     14     4  DIB header size
//!     18     4  width (signed)
//!     22     4  height (signed, negative = top-down)
//!     26     2  planes
//!     28     2  bits per pixel
//!     30     4  compression
//!     34     4  image data size
//!     38    16  resolution and palette counts
//! ```

/// Size of the file header plus `BITMAPINFOHEADER`.
pub const HEADER_SIZE: usize = 54;

/// Size of the `BITMAPINFOHEADER` DIB header.
pub const DIB_HEADER_SIZE: u32 = 40;

/// Magic bytes at the start of every BMP file.
pub const SIGNATURE: [u8; 2] = *b"BM";

/// The only supported pixel depth.
pub const BITS_PER_PIXEL: u16 = 24;

/// `BI_RGB`, i.e. uncompressed.
pub const COMPRESSION_NONE: u32 = 0;

/// Bytes per row including padding to a 4-byte boundary.
#[inline]
pub fn row_stride(width: usize) -> usize {
    (width * 3).div_ceil(4) * 4
}

/// Number of zero bytes appended to each row.
#[inline]
pub fn row_padding(width: usize) -> usize {
    row_stride(width) - width * 3
}

/// Parsed fields of a 54-byte BMP header.
///
/// Values are raw: no validation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub pixel_offset: u32,
    pub dib_header_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
}

impl BmpHeader {
    /// Header describing an uncompressed bottom-up 24-bit image.
    ///
    /// `image_size` is the padded pixel data length and must already fit in
    /// the 32-bit fields; the encoder checks that.
    pub fn for_image(width: i32, height: i32, image_size: u32) -> Self {
        Self {
            signature: SIGNATURE,
            file_size: HEADER_SIZE as u32 + image_size,
            pixel_offset: HEADER_SIZE as u32,
            dib_header_size: DIB_HEADER_SIZE,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size,
        }
    }

    pub fn parse(bytes: &[u8; HEADER_SIZE]) -> Self {
        Self {
            signature: [bytes[0], bytes[1]],
            file_size: read_u32(bytes, 2),
            pixel_offset: read_u32(bytes, 10),
            dib_header_size: read_u32(bytes, 14),
            width: read_i32(bytes, 18),
            height: read_i32(bytes, 22),
            planes: read_u16(bytes, 26),
            bits_per_pixel: read_u16(bytes, 28),
            compression: read_u32(bytes, 30),
            image_size: read_u32(bytes, 34),
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        // 6..10 reserved
        out[10..14].copy_from_slice(&self.pixel_offset.to_le_bytes());
        out[14..18].copy_from_slice(&self.dib_header_size.to_le_bytes());
        out[18..22].copy_from_slice(&self.width.to_le_bytes());
        out[22..26].copy_from_slice(&self.height.to_le_bytes());
        out[26..28].copy_from_slice(&self.planes.to_le_bytes());
        out[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[30..34].copy_from_slice(&self.compression.to_le_bytes());
        out[34..38].copy_from_slice(&self.image_size.to_le_bytes());
        // 38..54 resolution and palette counts stay zero
        out
    }

    /// True if rows are stored top-to-bottom (negative height).
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}

#[inline]
fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    read_u32(bytes, offset) as i32
}
