//! Interactive editing session.
//!
//! Prompts for a bitmap, then reads one command per line until `q`, which
//! asks for an output name and saves. Generic over the input and output
//! streams so it can be driven from tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::{info, warn};
use manipulator_core::{decode_bmp_file, encode_bmp_file, Operation, PixelBuffer};

pub const FILE_PROMPT: &str = "What image file would you like to edit: ";
pub const COMMAND_PROMPT: &str = "What command would you like to perform (i, g, b, v, s, d, r, q): ";
pub const SAVE_PROMPT: &str = "What do you want to name your new image file: ";

const QUIT: char = 'q';

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The image was written to this path.
    Saved(PathBuf),
    /// The input file could not be decoded.
    LoadFailed,
    /// Quit was requested but the output could not be written.
    SaveFailed,
    /// Input ended before quit.
    Abandoned,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the prompt loop to completion.
    ///
    /// Decode and encode failures are reported on the output stream and
    /// reflected in the returned [`Outcome`]; only failures of the streams
    /// themselves are errors.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        let Some(path) = self.prompt(FILE_PROMPT)? else {
            return Ok(Outcome::Abandoned);
        };

        let mut image = match decode_bmp_file(&path) {
            Ok(image) => {
                info!("Loaded {} ({}x{})", path, image.width(), image.height());
                image
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path, e);
                writeln!(self.output, "Wrong file input.")?;
                return Ok(Outcome::LoadFailed);
            }
        };

        loop {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                info!("Input closed without quit; nothing saved");
                return Ok(Outcome::Abandoned);
            };

            match line.chars().next() {
                Some(QUIT) => return self.save(&image),
                Some(c) => match Operation::from_command(c) {
                    Some(op) => image = op.apply(image),
                    None => writeln!(self.output, "Invalid command.")?,
                },
                None => writeln!(self.output, "Invalid command.")?,
            }
        }
    }

    fn save(&mut self, image: &PixelBuffer) -> anyhow::Result<Outcome> {
        let Some(name) = self.prompt(SAVE_PROMPT)? else {
            return Ok(Outcome::Abandoned);
        };

        match encode_bmp_file(image, &name) {
            Ok(()) => {
                writeln!(self.output, "Image saved as {}", name)?;
                Ok(Outcome::Saved(PathBuf::from(name)))
            }
            Err(e) => {
                warn!("Failed to save {}: {}", name, e);
                writeln!(self.output, "Error saving the file.")?;
                Ok(Outcome::SaveFailed)
            }
        }
    }

    /// Print `prompt` and read one line without its terminator. `None` at
    /// end of input.
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
