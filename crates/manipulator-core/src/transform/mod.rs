//! Pixel transformation engine.
//!
//! Every operation takes ownership of a [`PixelBuffer`] and returns its
//! replacement. Color transforms and the vertical mirror reuse the owned
//! storage; the others build a new buffer and drop the old one.
//!
//! # Operations
//!
//! | Operation        | Command | Output size        |
//! |------------------|---------|--------------------|
//! | `invert`         | `i`     | same               |
//! | `grayscale`      | `g`     | same               |
//! | `blur`           | `b`     | same               |
//! | `vertical_mirror`| `v`     | same               |
//! | `shrink`         | `s`     | `w / 2` x `h / 2`  |
//! | `double_size`    | `d`     | `2w` x `2h`        |
//! | `rotate_right`   | `r`     | `h` x `w`          |
//!
//! All operations are total: any well-formed buffer, including an empty
//! one, produces a well-formed result.

mod blur;
mod color;
mod geometry;
mod resample;

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pixel::PixelBuffer;

pub use blur::blur;
pub use color::{grayscale, invert};
pub use geometry::{rotate_right, vertical_mirror};
pub use resample::{double_size, shrink};

/// One step of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Invert,
    Grayscale,
    Blur,
    VerticalMirror,
    Shrink,
    DoubleSize,
    RotateRight,
}

impl Operation {
    /// Every operation, in command-prompt order.
    pub const ALL: [Operation; 7] = [
        Operation::Invert,
        Operation::Grayscale,
        Operation::Blur,
        Operation::VerticalMirror,
        Operation::Shrink,
        Operation::DoubleSize,
        Operation::RotateRight,
    ];

    /// Single-character command used by the interactive driver.
    pub fn command(self) -> char {
        match self {
            Operation::Invert => 'i',
            Operation::Grayscale => 'g',
            Operation::Blur => 'b',
            Operation::VerticalMirror => 'v',
            Operation::Shrink => 's',
            Operation::DoubleSize => 'd',
            Operation::RotateRight => 'r',
        }
    }

    pub fn from_command(c: char) -> Option<Operation> {
        Operation::ALL.into_iter().find(|op| op.command() == c)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Invert => "invert",
            Operation::Grayscale => "grayscale",
            Operation::Blur => "blur",
            Operation::VerticalMirror => "vertical_mirror",
            Operation::Shrink => "shrink",
            Operation::DoubleSize => "double_size",
            Operation::RotateRight => "rotate_right",
        }
    }

    /// Run this operation, consuming the input buffer.
    pub fn apply(self, image: PixelBuffer) -> PixelBuffer {
        let before = image.dimensions();
        let out = match self {
            Operation::Invert => invert(image),
            Operation::Grayscale => grayscale(image),
            Operation::Blur => blur(image),
            Operation::VerticalMirror => vertical_mirror(image),
            Operation::Shrink => shrink(image),
            Operation::DoubleSize => double_size(image),
            Operation::RotateRight => rotate_right(image),
        };
        debug!(
            "{}: {}x{} -> {}x{}",
            self,
            before.0,
            before.1,
            out.width(),
            out.height()
        );
        out
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operation: {0:?}")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    /// Accepts either the command character (`"r"`) or the name
    /// (`"rotate_right"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operation::from_command(c) {
                return Ok(op);
            }
        }
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| ParseOperationError(s.to_string()))
    }
}

/// Apply `ops` left to right, each step consuming the previous result.
pub fn apply_operations<I>(image: PixelBuffer, ops: I) -> PixelBuffer
where
    I: IntoIterator<Item = Operation>,
{
    ops.into_iter().fold(image, |img, op| op.apply(img))
}
