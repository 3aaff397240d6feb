//! Whole-file conversion pipeline: read, transform, write.
//!
//! The pipeline handles a file in one piece. The input is read fully into
//! memory as UTF-8 text, transformed in the direction selected by [`Mode`],
//! and the result overwrites the output path. The write is only attempted
//! after the transform completes, so a failure during read leaves the
//! output untouched.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use crate::decode::decode;
use crate::diag::DiagnosticSink;
use crate::encode::encode;
use crate::error::{Error, Result};

/// Conversion direction.
///
/// A closed two-variant choice; an unrecognized mode string is rejected by
/// [`Mode::from_str`] before any file is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain text to Morse notation
    ToMorse,

    /// Morse notation to plain text
    ToText,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "to_morse" => Ok(Mode::ToMorse),
            "to_text" => Ok(Mode::ToText),
            other => Err(Error::InvalidMode {
                given: other.to_string(),
            }),
        }
    }
}

/// Convert one file and write the result to another.
///
/// # Arguments
/// - `input`: path to the file to read (UTF-8 text)
/// - `output`: path to write the converted content to, overwriting
/// - `mode`: conversion direction
/// - `sink`: receives content-level diagnostics from the transform
///
/// # Errors
/// - [`Error::InputNotFound`] if `input` does not exist (nothing is written)
/// - [`Error::Io`] for any other read or write failure
pub fn convert_file(
    input: &Path,
    output: &Path,
    mode: Mode,
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    let content = fs::read_to_string(input).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::InputNotFound {
                path: input.to_path_buf(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    log::debug!("input file content: {}", content);

    let result = match mode {
        Mode::ToMorse => encode(&content, sink),
        Mode::ToText => decode(&content, sink),
    };
    log::debug!("conversion result: {}", result);

    fs::write(output, result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("to_morse".parse::<Mode>().unwrap(), Mode::ToMorse);
        assert_eq!("to_text".parse::<Mode>().unwrap(), Mode::ToText);
    }

    #[test]
    fn test_mode_rejects_unknown_strings() {
        for bad in ["", "to_binary", "TO_MORSE", "morse"] {
            let err = bad.parse::<Mode>().unwrap_err();
            assert!(matches!(err, Error::InvalidMode { .. }), "{:?}", bad);
        }
    }
}
