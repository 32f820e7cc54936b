// File: src/errors.rs
//
// Diagnostic reporting for the SharpScript pipeline.
// Diagnostics are never values: they are printed to stderr and the
// offending construct degrades to null. Structured runtime errors raised
// by system.throw are ordinary interpreter values and do not come through
// here.

use colored::Colorize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Parse,
    Runtime,
    Include,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Parse => write!(f, "Parse error"),
            DiagnosticKind::Runtime => write!(f, "Runtime error"),
            DiagnosticKind::Include => write!(f, "Include error"),
        }
    }
}

/// A diagnostic with an optional source line number (parse diagnostics
/// carry one, runtime diagnostics usually do not).
#[derive(Debug, Clone)]
pub struct SharpError {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: Option<usize>,
}

impl SharpError {
    pub fn parse(message: impl Into<String>, line: usize) -> Self {
        SharpError { kind: DiagnosticKind::Parse, message: message.into(), line: Some(line) }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        SharpError { kind: DiagnosticKind::Runtime, message: message.into(), line: None }
    }

    pub fn include(message: impl Into<String>) -> Self {
        SharpError { kind: DiagnosticKind::Include, message: message.into(), line: None }
    }

    /// Writes the diagnostic to stderr.
    pub fn report(&self) {
        eprintln!("{}", self);
    }
}

impl fmt::Display for SharpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind.to_string();
        match self.line {
            Some(line) => write!(f, "{} at line {}: {}", kind.red().bold(), line, self.message),
            None => write!(f, "{}: {}", kind.red().bold(), self.message),
        }
    }
}

impl std::error::Error for SharpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diagnostics_carry_the_line() {
        colored::control::set_override(false);
        let err = SharpError::parse("unexpected token '}'", 7);
        assert_eq!(err.to_string(), "Parse error at line 7: unexpected token '}'");
    }

    #[test]
    fn runtime_diagnostics_have_no_location() {
        colored::control::set_override(false);
        let err = SharpError::runtime("Undefined variable: x");
        assert_eq!(err.to_string(), "Runtime error: Undefined variable: x");
    }
}
