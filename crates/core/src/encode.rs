//! Text to Morse encoding.
//!
//! The transform is total: every input string produces an output string.
//! Characters outside the symbol table encode as the word separator `/` and
//! are reported through the diagnostic sink rather than failing the run.

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::table;

/// Encode a text string as space-separated Morse codes.
///
/// The input is uppercased first, since the table is defined over canonical
/// uppercase forms only. Character order is preserved.
///
/// # Arguments
/// - `text`: arbitrary input text (may be empty, may contain unmapped characters)
/// - `sink`: receives one diagnostic per unmapped character
///
/// # Returns
/// Morse codes joined by single spaces; empty input yields an empty string.
pub fn encode(text: &str, sink: &mut dyn DiagnosticSink) -> String {
    let canonical = text.to_uppercase();
    let mut codes = Vec::new();

    for c in canonical.chars() {
        match table::code_for(c) {
            Some(code) => codes.push(code),
            None => {
                sink.report(Diagnostic::UnmappedChar(c));
                codes.push("/");
            }
        }
    }

    codes.join(" ")
}
