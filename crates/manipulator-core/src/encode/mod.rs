//! BMP encoding.
//!
//! This module writes a [`PixelBuffer`](crate::PixelBuffer) as a 24-bit
//! uncompressed bottom-up Windows bitmap with a 54-byte header.
//!
//! # Examples
//!
//! ```ignore
//! use manipulator_core::encode::encode_bmp_file;
//!
//! encode_bmp_file(&image, "out.bmp")?;
//! ```

mod bmp;

pub use bmp::{encode_bmp, encode_bmp_file, encode_bmp_to_writer, EncodeError};
