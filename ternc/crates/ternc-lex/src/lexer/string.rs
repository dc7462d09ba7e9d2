//! String literal scanning.

use crate::token::TokenKind;
use crate::{Lexer, Token};

impl<'a> Lexer<'a> {
    /// Scans a string literal.
    ///
    /// Characters between the quotes are taken verbatim; there is no escape
    /// processing. Embedded newlines are allowed and counted against the
    /// line tracker. Reaching end-of-input before the closing quote yields
    /// an error token positioned at the line the string began on.
    pub(crate) fn lex_string(&mut self) -> Token<'a> {
        // Opening quote.
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return self.error_token("unterminated string");
        }

        // Closing quote.
        self.cursor.advance();
        self.make_token(TokenKind::Str)
    }
}
