//! Error types for the converter.
//!
//! All operations return structured errors rather than panicking.
//! Unmappable content (a character with no Morse code, a token with no
//! inverse) is NOT an error: the transforms substitute a placeholder and
//! report it through the diagnostic sink. The variants here cover the
//! operational failures that abort a conversion outright.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Input lookup: the input path does not exist
/// - Mode selection: the mode string is not a recognized direction
/// - I/O: any other file system failure during read or write
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist at the given path
    #[error("input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// Mode string is not one of the two recognized values
    #[error("invalid mode {given:?}: use 'to_morse' or 'to_text'")]
    InvalidMode { given: String },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
