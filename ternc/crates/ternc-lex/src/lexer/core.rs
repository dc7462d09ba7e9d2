//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct, the character dispatch,
//! and the whole-buffer convenience drivers built on top of the pull API.

use ternc_util::Handler;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::lexer::identifier::is_ident_start;
use crate::token::{Token, TokenKind, TokenText};

/// Lexer for Tern source code.
///
/// The lexer is pull-based: each call to [`next_token`](Lexer::next_token)
/// classifies exactly one lexical unit and advances past it. Malformed
/// input never aborts the scan; it degrades to an error token and scanning
/// resumes at the next character.
///
/// # Example
///
/// ```
/// use ternc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("var x = 42;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Var);
/// assert_eq!(lexer.next_token().kind, TokenKind::Ident);
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer positioned at the first character, line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and line comments, then dispatches on the first
    /// character of the token. At the end of input this returns an `Eof`
    /// token, and keeps returning `Eof` on every further call.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof);
        }

        let c = self.cursor.current_char();

        if is_ident_start(c) {
            return self.lex_identifier();
        }
        if c.is_ascii_digit() {
            return self.lex_number();
        }

        match c {
            '(' => {
                self.cursor.advance();
                self.make_token(TokenKind::LParen)
            },
            ')' => {
                self.cursor.advance();
                self.make_token(TokenKind::RParen)
            },
            '{' => {
                self.cursor.advance();
                self.make_token(TokenKind::LBrace)
            },
            '}' => {
                self.cursor.advance();
                self.make_token(TokenKind::RBrace)
            },
            ',' => {
                self.cursor.advance();
                self.make_token(TokenKind::Comma)
            },
            '.' => {
                self.cursor.advance();
                self.make_token(TokenKind::Dot)
            },
            '-' => {
                self.cursor.advance();
                self.make_token(TokenKind::Minus)
            },
            '+' => {
                self.cursor.advance();
                self.make_token(TokenKind::Plus)
            },
            ';' => {
                self.cursor.advance();
                self.make_token(TokenKind::Semicolon)
            },
            '/' => {
                // A '//' sequence was already consumed as a comment above,
                // so a slash here is always the division operator.
                self.cursor.advance();
                self.make_token(TokenKind::Slash)
            },
            '*' => {
                self.cursor.advance();
                self.make_token(TokenKind::Star)
            },
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '"' => self.lex_string(),
            _ => {
                self.cursor.advance();
                self.error_token("unexpected character")
            },
        }
    }

    /// Builds a token spanning `[token_start, position)`.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_start_line,
        )
    }

    /// Builds an error token at the line the current token started on.
    pub(crate) fn error_token(&self, message: &'static str) -> Token<'a> {
        Token::error(message, self.token_start_line)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans the whole buffer, recording a diagnostic for every error token.
///
/// This is the accumulate-and-continue policy: scanning keeps going past
/// errors so several problems can be reported at once. The returned vector
/// ends with the `Eof` token.
///
/// # Example
///
/// ```
/// use ternc_lex::scan_with_diagnostics;
/// use ternc_util::Handler;
///
/// let mut handler = Handler::new();
/// let tokens = scan_with_diagnostics("var ^ x ^", &mut handler);
/// assert_eq!(handler.error_count(), 2);
/// assert_eq!(tokens.len(), 5); // var, error, x, error, eof
/// ```
pub fn scan_with_diagnostics<'a>(source: &'a str, handler: &mut Handler) -> Vec<Token<'a>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        if let TokenText::Diagnostic(message) = token.text {
            handler.error(message, token.line);
        }

        let at_end = token.is_eof();
        tokens.push(token);
        if at_end {
            return tokens;
        }
    }
}

/// Scans the whole buffer, failing on the first error token.
///
/// This is the strict policy: the first malformed region aborts the scan
/// with a [`LexError`]. The returned vector ends with the `Eof` token.
///
/// # Example
///
/// ```
/// use ternc_lex::tokenize;
///
/// let tokens = tokenize("var x = 1;").unwrap();
/// assert_eq!(tokens.len(), 6); // var, x, =, 1, ;, eof
///
/// let err = tokenize("\"open").unwrap_err();
/// assert_eq!(err.message, "unterminated string");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        if let Some(err) = LexError::from_token(&token) {
            return Err(err);
        }

        let at_end = token.is_eof();
        tokens.push(token);
        if at_end {
            return Ok(tokens);
        }
    }
}
