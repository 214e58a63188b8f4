//! Manipulator Core - bitmap codec and pixel transformation engine
//!
//! This crate loads 24-bit uncompressed BMP files into an in-memory
//! [`PixelBuffer`], runs a chain of pixel transformations over it, and writes
//! the result back out as BMP.
//!
//! # Control Flow
//!
//! ```text
//! decode_bmp_file -> PixelBuffer -> Operation::apply ... -> encode_bmp_file
//! ```
//!
//! Each transform takes ownership of the buffer and returns the replacement,
//! so there is never more than one live image apart from the transient copy
//! a size-changing transform builds.

pub mod bmp;
pub mod decode;
pub mod encode;
pub mod interop;
pub mod luminance;
pub mod pixel;
pub mod transform;

pub use decode::{decode_bmp, decode_bmp_file, DecodeError};
pub use encode::{encode_bmp, encode_bmp_file, EncodeError};
pub use pixel::{PixelBuffer, Rgb, ShapeError};
pub use transform::{apply_operations, Operation, ParseOperationError};
