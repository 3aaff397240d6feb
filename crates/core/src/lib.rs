//! morse-convert-core: Bidirectional text/Morse file conversion
//!
//! This library provides the core components for a small converter that:
//! - Maps characters to Morse codes through a static bidirectional table
//! - Encodes text as space-separated Morse notation
//! - Decodes Morse notation back to text
//! - Runs whole-file conversions in either direction
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `table`: Static character ↔ code mapping
//! - `encode`: Text → Morse transform
//! - `decode`: Morse → text transform
//! - `diag`: Injectable sink for content-level warnings
//! - `pipeline`: Whole-file read/convert/write orchestration
//!
//! # Design Principles
//!
//! - **No panics**: operational failures are structured errors; unmappable
//!   content is substituted and reported, never fatal
//! - **Immutable table**: the symbol table is built once and never mutated,
//!   so it is safe to share without synchronization
//! - **Observable**: every substitution reaches the caller through the
//!   diagnostic sink instead of being printed behind its back

pub mod decode;
pub mod diag;
pub mod encode;
pub mod error;
pub mod pipeline;
pub mod table;

// Re-export commonly used types
pub use diag::{Diagnostic, DiagnosticSink, LogSink};
pub use error::{Error, Result};
pub use pipeline::{convert_file, Mode};
