//! Error type for BMP decoding.

use std::io;

use thiserror::Error;

/// Error types for BMP decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Not a 24-bit uncompressed BMP.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Header fields are inconsistent or impossible.
    #[error("Corrupted bitmap header: {0}")]
    CorruptedFile(String),

    /// Declared dimensions exceed what the decoder will allocate.
    #[error("Image too large: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    /// Missing or unreadable file, or a stream that ended early.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl DecodeError {
    /// True if the stream ended before all declared data was read.
    pub fn is_truncated(&self) -> bool {
        matches!(self, DecodeError::IoError(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
