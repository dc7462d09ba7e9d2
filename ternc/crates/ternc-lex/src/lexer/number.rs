//! Number literal scanning.

use crate::token::TokenKind;
use crate::{Lexer, Token};

impl<'a> Lexer<'a> {
    /// Scans an integer literal.
    ///
    /// Consumes the maximal run of decimal digits. The language has no
    /// floating-point literals yet, so a following `.` is left in place and
    /// scans as its own dot token.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        // TODO: float literals once the grammar grows them
        self.make_token(TokenKind::Number)
    }
}
