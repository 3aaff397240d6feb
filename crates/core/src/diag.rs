//! Diagnostics for content-level conversion warnings.
//!
//! Unmapped characters and unrecognized Morse tokens are recoverable: the
//! transforms substitute a placeholder and keep going. The warning itself
//! flows through a sink supplied by the caller, so the CLI can log it while
//! tests collect and assert on it without touching the console.

use std::fmt;

/// A single content-level warning produced during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Input character with no Morse mapping; encoded as `/`
    UnmappedChar(char),

    /// Morse token with no inverse mapping; decoded as a space
    UnknownToken(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnmappedChar(c) => write!(f, "unmapped character: {:?}", c),
            Diagnostic::UnknownToken(token) => write!(f, "unrecognized morse token: {:?}", token),
        }
    }
}

/// Receives the diagnostics emitted by the encoder and decoder.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Default sink: forwards every diagnostic to the `log` facade.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

/// Collector for callers that want the warnings back.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::UnmappedChar('#'));
        sink.report(Diagnostic::UnknownToken("........".to_string()));

        assert_eq!(
            sink,
            vec![
                Diagnostic::UnmappedChar('#'),
                Diagnostic::UnknownToken("........".to_string()),
            ]
        );
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::UnmappedChar('#');
        assert_eq!(d.to_string(), "unmapped character: '#'");

        let d = Diagnostic::UnknownToken("--------".to_string());
        assert_eq!(d.to_string(), "unrecognized morse token: \"--------\"");
    }
}
