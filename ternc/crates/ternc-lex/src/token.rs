//! Token definitions for the Tern language.
//!
//! A token pairs a [`TokenKind`] with its textual payload and the line it
//! started on. Ordinary tokens borrow their lexeme straight from the source
//! buffer; error tokens carry a static diagnostic message instead. The two
//! payload shapes are mutually exclusive and modeled by [`TokenText`].

use std::fmt;

/// The kind of a lexical token.
///
/// This is a closed set; the parser is expected to match over it
/// exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    /// `!`
    Bang,
    /// `!=`
    BangEq,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,

    /// An identifier such as `count` or `_tmp`.
    Ident,
    /// A double-quoted string literal, quotes included in the lexeme.
    Str,
    /// An integer literal. Floats are not part of the language yet.
    Number,

    /// `else`
    Else,
    /// `false`
    False,
    /// `for`
    For,
    /// `fn`
    Fn,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `return`
    Return,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// A scan failure; the token carries a diagnostic message instead of
    /// source text.
    Error,
    /// End of input. Scanning past it keeps producing `Eof`.
    Eof,
}

impl TokenKind {
    /// Returns true if this kind is a reserved keyword.
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Else
                | TokenKind::False
                | TokenKind::For
                | TokenKind::Fn
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }

    /// A short human-readable description, used in parser error messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Minus => "'-'",
            TokenKind::Plus => "'+'",
            TokenKind::Semicolon => "';'",
            TokenKind::Slash => "'/'",
            TokenKind::Star => "'*'",
            TokenKind::Bang => "'!'",
            TokenKind::BangEq => "'!='",
            TokenKind::Eq => "'='",
            TokenKind::EqEq => "'=='",
            TokenKind::Lt => "'<'",
            TokenKind::LtEq => "'<='",
            TokenKind::Gt => "'>'",
            TokenKind::GtEq => "'>='",
            TokenKind::AndAnd => "'&&'",
            TokenKind::OrOr => "'||'",
            TokenKind::Ident => "identifier",
            TokenKind::Str => "string literal",
            TokenKind::Number => "number literal",
            TokenKind::Else => "'else'",
            TokenKind::False => "'false'",
            TokenKind::For => "'for'",
            TokenKind::Fn => "'fn'",
            TokenKind::If => "'if'",
            TokenKind::Nil => "'nil'",
            TokenKind::Return => "'return'",
            TokenKind::True => "'true'",
            TokenKind::Var => "'var'",
            TokenKind::While => "'while'",
            TokenKind::Error => "error",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Resolves an identifier spelling against the reserved keyword table.
///
/// Keywords are case-sensitive and matched in full; any longer or shorter
/// spelling falls through to `None` and scans as an identifier.
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fn" => TokenKind::Fn,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// The textual payload of a token.
///
/// Ordinary tokens borrow their lexeme from the source buffer, so tokens
/// never outlive the text they were scanned from. Error tokens instead
/// carry a static diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenText<'a> {
    /// A lexeme borrowed from the source buffer.
    Source(&'a str),
    /// A static diagnostic message; only `TokenKind::Error` tokens use this.
    Diagnostic(&'static str),
}

impl<'a> TokenText<'a> {
    /// Returns the payload as a string slice, whichever shape it is.
    pub fn as_str(self) -> &'a str {
        match self {
            TokenText::Source(text) => text,
            TokenText::Diagnostic(message) => message,
        }
    }
}

/// A classified, positioned span of source text (or a diagnostic).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the scanner classified this span as.
    pub kind: TokenKind,
    /// Lexeme text or diagnostic message.
    pub text: TokenText<'a>,
    /// Line number where the token starts (1-based).
    pub line: u32,
}

impl<'a> Token<'a> {
    /// Creates a token borrowing its lexeme from the source buffer.
    pub fn new(kind: TokenKind, text: &'a str, line: u32) -> Self {
        Self {
            kind,
            text: TokenText::Source(text),
            line,
        }
    }

    /// Creates an error token carrying a static diagnostic message.
    pub fn error(message: &'static str, line: u32) -> Self {
        Self {
            kind: TokenKind::Error,
            text: TokenText::Diagnostic(message),
            line,
        }
    }

    /// Returns true if this is the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true if this token reports a scan failure.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}
