//! One- and two-character operator scanning.
//!
//! Two-character operators are recognized with a single character of
//! lookahead via `match_char`. For `!`, `=`, `<`, and `>` the
//! single-character form is the fallback; `&` and `|` have no
//! single-character form in the grammar and degrade to an error token.

use crate::token::TokenKind;
use crate::{Lexer, Token};

impl<'a> Lexer<'a> {
    /// Scans `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::BangEq)
        } else {
            self.make_token(TokenKind::Bang)
        }
    }

    /// Scans `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::EqEq)
        } else {
            self.make_token(TokenKind::Eq)
        }
    }

    /// Scans `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::LtEq)
        } else {
            self.make_token(TokenKind::Lt)
        }
    }

    /// Scans `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::GtEq)
        } else {
            self.make_token(TokenKind::Gt)
        }
    }

    /// Scans `&&`. A lone `&` starts no token in the grammar.
    pub(crate) fn lex_ampersand(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.make_token(TokenKind::AndAnd)
        } else {
            self.error_token("unexpected character")
        }
    }

    /// Scans `||`. A lone `|` starts no token in the grammar.
    pub(crate) fn lex_pipe(&mut self) -> Token<'a> {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.make_token(TokenKind::OrOr)
        } else {
            self.error_token("unexpected character")
        }
    }
}
