//! Command-line argument handling.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use manipulator_core::Operation;

/// Edit 24-bit BMP images with invert, grayscale, blur, mirror, shrink, double and rotate
///
/// With no arguments, starts an interactive session that prompts for a file
/// and then for one command per line. With an input and output, applies the
/// given commands left to right and saves the result.
///
/// Set RUST_LOG=debug for diagnostic output on stderr.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Bitmap to edit (omit for an interactive session)
    #[arg(requires = "output")]
    pub input: Option<PathBuf>,

    /// Path to save the edited bitmap
    pub output: Option<PathBuf>,

    /// Command characters, e.g. "igr": i invert, g grayscale, b blur,
    /// v vertical mirror, s shrink, d double size, r rotate right
    #[arg(value_parser = parse_command_list)]
    pub commands: Option<CommandList>,
}

/// Operations given on the command line, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandList(pub Vec<Operation>);

impl Args {
    /// `(input, output, operations)` when run in batch mode.
    pub fn batch(&self) -> Option<(&PathBuf, &PathBuf, &[Operation])> {
        let ops = self.commands.as_ref().map_or(&[][..], |c| c.0.as_slice());
        Some((self.input.as_ref()?, self.output.as_ref()?, ops))
    }
}

/// Parse a string of command characters such as `"igr"`.
pub fn parse_commands(commands: &str) -> anyhow::Result<Vec<Operation>> {
    commands
        .chars()
        .enumerate()
        .map(|(pos, c)| {
            Operation::from_command(c)
                .ok_or_else(|| anyhow!("invalid command {:?} at position {}", c, pos + 1))
        })
        .collect()
}

fn parse_command_list(commands: &str) -> anyhow::Result<CommandList> {
    parse_commands(commands).map(CommandList)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("manipulator").chain(list.iter().copied()))
    }

    #[test]
    fn test_no_args_is_interactive() {
        let args = parse(&[]).unwrap();
        assert!(args.batch().is_none());
    }

    #[test]
    fn test_help_is_generated() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("rotate right"));

        assert_eq!(parse(&["-h"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_batch_with_commands() {
        let args = parse(&["in.bmp", "out.bmp", "gsr"]).unwrap();
        let (input, output, ops) = args.batch().unwrap();
        assert_eq!(input, &PathBuf::from("in.bmp"));
        assert_eq!(output, &PathBuf::from("out.bmp"));
        assert_eq!(
            ops,
            &[
                Operation::Grayscale,
                Operation::Shrink,
                Operation::RotateRight
            ]
        );
    }

    #[test]
    fn test_batch_without_commands() {
        let args = parse(&["in.bmp", "out.bmp"]).unwrap();
        let (_, _, ops) = args.batch().unwrap();
        assert!(ops.is_empty());
    }

    #[test]
    fn test_input_requires_output() {
        let err = parse(&["only.bmp"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_too_many_args() {
        assert!(parse(&["a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn test_bad_command_reports_position() {
        let err = parse_commands("igx").unwrap_err();
        assert_eq!(err.to_string(), "invalid command 'x' at position 3");

        let err = parse(&["in.bmp", "out.bmp", "igx"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("invalid command 'x' at position 3"));
    }
}
