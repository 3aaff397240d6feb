//! Command-line handling for the morse-convert binary.
//!
//! The interface is three positional arguments: input path, output path,
//! and conversion mode. Anything else prints the usage text and takes no
//! further action.

use std::path::PathBuf;

use morse_convert_core::{Mode, Result};

/// A single conversion request parsed from the command line.
///
/// Created per invocation and consumed immediately; nothing persists.
#[derive(Debug, Clone)]
pub struct Request {
    /// Input file path (plain text or Morse notation)
    pub input_file: PathBuf,

    /// Output file path for the converted content
    pub output_file: PathBuf,

    /// Conversion direction
    pub mode: Mode,
}

impl Request {
    /// Parse the three positional arguments (program name excluded).
    ///
    /// The caller has already checked the argument count; this validates the
    /// mode string and builds the request.
    ///
    /// # Errors
    /// [`morse_convert_core::Error::InvalidMode`] when the third argument is
    /// not `to_morse` or `to_text`. The mode is checked before any file is
    /// touched.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mode: Mode = args[2].parse()?;

        Ok(Request {
            input_file: PathBuf::from(&args[0]),
            output_file: PathBuf::from(&args[1]),
            mode,
        })
    }
}

/// Print the usage text listing both modes.
pub fn print_usage() {
    println!("morse-convert: whole-file text/Morse conversion");
    println!();
    println!("USAGE:");
    println!("    morse-convert <input_file> <output_file> <mode>");
    println!();
    println!("MODES:");
    println!("    to_morse    convert plain text to Morse notation");
    println!("    to_text     convert Morse notation back to plain text");
    println!();
    println!("EXAMPLES:");
    println!("    morse-convert message.txt message.morse to_morse");
    println!("    morse-convert message.morse message.txt to_text");
}
