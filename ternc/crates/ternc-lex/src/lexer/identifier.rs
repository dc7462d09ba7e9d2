//! Identifier and keyword scanning.

use crate::token::{keyword_from_ident, TokenKind};
use crate::{Lexer, Token};

/// Returns true if `c` can start an identifier.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes the maximal run of alphanumeric/underscore characters, then
    /// resolves the spanned text against the keyword table. Keyword lookup
    /// happens only after the full run is consumed, so `elsewhere` is one
    /// identifier, never `else` plus `where`.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keyword_from_ident(text).unwrap_or(TokenKind::Ident);
        self.make_token(kind)
    }
}
