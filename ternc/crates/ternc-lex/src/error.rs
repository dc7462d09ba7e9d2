//! Lexical error type for strict scanning.
//!
//! The lexer itself never fails; it reports problems as error tokens. This
//! module provides the conversion used by callers that want to treat the
//! first error token as fatal, such as [`tokenize`](crate::tokenize).

use thiserror::Error;

use crate::token::{Token, TokenKind, TokenText};

/// A fatal lexical error derived from an error token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{message} (line {line})")]
pub struct LexError {
    /// The static diagnostic message carried by the error token.
    pub message: &'static str,
    /// Line number where the error was detected (1-based).
    pub line: u32,
}

impl LexError {
    /// Converts an error token into a `LexError`.
    ///
    /// Returns `None` for every other token kind.
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        if token.kind != TokenKind::Error {
            return None;
        }
        match token.text {
            TokenText::Diagnostic(message) => Some(Self {
                message,
                line: token.line,
            }),
            TokenText::Source(_) => None,
        }
    }
}
