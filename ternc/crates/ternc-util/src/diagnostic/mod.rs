//! Diagnostic module - error and warning reporting infrastructure.
//!
//! The lexer never aborts on malformed input; it degrades to error tokens
//! and leaves the reporting policy to the caller. This module provides the
//! pieces a caller needs to accumulate and render those reports: a severity
//! [`Level`], a positioned [`Diagnostic`], and a [`Handler`] that collects
//! diagnostics in emission order.
//!
//! # Example
//!
//! ```
//! use ternc_util::diagnostic::{Diagnostic, Handler};
//!
//! let mut handler = Handler::new();
//! handler.report(Diagnostic::error("unterminated string", 7));
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{diag}");
//!     }
//! }
//! ```

mod level;

pub use level::Level;

use std::fmt;

/// A diagnostic message with severity and source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Line number where the problem was detected (1-based).
    pub line: u32,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, line: u32) -> Self {
        Self {
            level,
            message: message.into(),
            line,
        }
    }

    /// Creates an error-level diagnostic.
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Error, message, line)
    }

    /// Creates a warning-level diagnostic.
    pub fn warning(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Warning, message, line)
    }

    /// Returns true if this diagnostic is an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (line {})", self.level, self.message, self.line)
    }
}

/// Collects diagnostics in emission order.
///
/// A `Handler` is a plain accumulator: phases push diagnostics into it and
/// the driver decides afterwards whether to print them, count them, or stop.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Records an error-level diagnostic.
    pub fn error(&mut self, message: impl Into<String>, line: u32) {
        self.report(Diagnostic::error(message, line));
    }

    /// Records a warning-level diagnostic.
    pub fn warning(&mut self, message: impl Into<String>, line: u32) {
        self.report(Diagnostic::warning(message, line));
    }

    /// Returns true if any error-level diagnostic has been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Returns the number of error-level diagnostics recorded.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Returns all recorded diagnostics, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unterminated string", 3);
        assert_eq!(diag.to_string(), "error: unterminated string (line 3)");
    }

    #[test]
    fn test_warning_display() {
        let diag = Diagnostic::warning("shadowed binding", 10);
        assert_eq!(diag.to_string(), "warning: shadowed binding (line 10)");
    }

    #[test]
    fn test_handler_starts_empty() {
        let handler = Handler::new();
        assert!(handler.is_empty());
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_collects_in_order() {
        let mut handler = Handler::new();
        handler.error("first", 1);
        handler.error("second", 2);

        let messages: Vec<&str> = handler
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_handler_error_count_ignores_warnings() {
        let mut handler = Handler::new();
        handler.warning("suspicious", 1);
        handler.error("broken", 2);

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_warnings_alone_are_not_errors() {
        let mut handler = Handler::new();
        handler.warning("suspicious", 1);
        assert!(!handler.has_errors());
    }
}
