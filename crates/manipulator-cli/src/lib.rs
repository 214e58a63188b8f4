//! Manipulator CLI - command-line driver for manipulator-core
//!
//! Holds no image logic of its own: it prompts, dispatches single-character
//! commands to [`manipulator_core::Operation`], and reports failures as text.
//!
//! # Module Structure
//!
//! - `args` - `clap` argument parsing (interactive vs. batch mode)
//! - `session` - the interactive prompt loop

pub mod args;
pub mod session;

use std::path::Path;

use anyhow::Context;
use log::info;
use manipulator_core::{apply_operations, decode_bmp_file, encode_bmp_file, Operation};

pub use args::{parse_commands, Args, CommandList};
pub use session::{Outcome, Session};

/// Load `input`, apply `operations` in order, and save to `output`.
pub fn run_batch(input: &Path, output: &Path, operations: &[Operation]) -> anyhow::Result<()> {
    let image = decode_bmp_file(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    info!(
        "Loaded {} ({}x{}), applying {} operation(s)",
        input.display(),
        image.width(),
        image.height(),
        operations.len()
    );

    let image = apply_operations(image, operations.iter().copied());

    encode_bmp_file(&image, output)
        .with_context(|| format!("failed to save {}", output.display()))?;
    info!("Saved {} ({}x{})", output.display(), image.width(), image.height());
    Ok(())
}
