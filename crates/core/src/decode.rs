//! Morse to text decoding.
//!
//! Tokens are split on runs of whitespace, so repeated separators collapse
//! and an all-whitespace input decodes to the empty string. This mirrors the
//! encoder's lenient policy: a token missing from the inverse table decodes
//! as a single space and is reported through the sink, never fatal.

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::table;

/// Decode whitespace-separated Morse tokens back to text.
///
/// Decoded characters are concatenated directly; the `/` token already
/// carries the spacing of the source text, so no separator is reinserted.
///
/// # Arguments
/// - `morse`: whitespace-separated Morse tokens (may be empty)
/// - `sink`: receives one diagnostic per unrecognized token
///
/// # Returns
/// The decoded text; empty input yields an empty string.
pub fn decode(morse: &str, sink: &mut dyn DiagnosticSink) -> String {
    let mut text = String::new();

    for token in morse.split_whitespace() {
        match table::char_for(token) {
            Some(c) => text.push(c),
            None => {
                sink.report(Diagnostic::UnknownToken(token.to_string()));
                text.push(' ');
            }
        }
    }

    text
}
