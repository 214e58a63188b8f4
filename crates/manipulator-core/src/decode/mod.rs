//! BMP decoding.
//!
//! This module turns a 24-bit uncompressed Windows bitmap into a
//! [`PixelBuffer`](crate::PixelBuffer):
//! - Header parsing and validation (signature, depth, compression)
//! - Skipping extended DIB headers up to the declared pixel offset
//! - Row-padding-aware pixel reads, bottom-up or top-down
//!
//! # Examples
//!
//! ```ignore
//! use manipulator_core::decode::decode_bmp_file;
//!
//! let image = decode_bmp_file("photo.bmp")?;
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod bmp;
mod types;

pub use bmp::{
    decode_bmp, decode_bmp_file, decode_bmp_from_reader, MAX_DIMENSION, MAX_PIXELS,
};
pub use types::DecodeError;
