//! ternc-lex - Lexical Analyzer for the Tern Programming Language
//!
//! This crate provides the lexer (scanner) for Tern. It transforms source
//! code into a stream of tokens consumable by the parser.
//!
//! # Overview
//!
//! The lexer is pull-based: each [`Lexer::next_token`] call classifies one
//! lexical unit and advances past it. Tokens borrow their text from the
//! source buffer, and malformed input degrades to error tokens instead of
//! aborting the scan.
//!
//! # Example Usage
//!
//! ```
//! use ternc_lex::{Lexer, TokenKind};
//!
//! let source = "var answer = 42;";
//! let mut lexer = Lexer::new(source);
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token().kind, TokenKind::Var);
//!
//! // Or iterate (the iterator ends before the Eof token)
//! for token in Lexer::new(source) {
//!     println!("{:?}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Lexer implementation and whole-buffer drivers
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Fatal-error conversion for strict scanning
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words (10 total, case-sensitive):
//! `else`, `false`, `for`, `fn`, `if`, `nil`, `return`, `true`, `var`,
//! `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Number**: decimal integers only (`42`, `007`)
//! - **String**: double-quoted, verbatim, no escape sequences (`"hello"`)
//!
//! ## Operators and Punctuation
//!
//! - **Grouping**: `(`, `)`, `{`, `}`
//! - **Separation**: `,`, `;`, `.`
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`
//!
//! ## Special
//!
//! - **Eof**: end-of-input marker, produced indefinitely once reached
//! - **Error**: a scan failure carrying a static diagnostic message

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{scan_with_diagnostics, tokenize, Lexer};
pub use token::{keyword_from_ident, Token, TokenKind, TokenText};
