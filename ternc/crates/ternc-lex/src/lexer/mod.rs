//! Lexer module.
//!
//! The implementation is split into focused components:
//! - `core` - Main `Lexer` struct, character dispatch, whole-buffer drivers
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Number literal scanning
//! - `string` - String literal scanning
//! - `operator` - One- and two-character operator scanning
//! - `comment` - Whitespace and comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{scan_with_diagnostics, tokenize, Lexer};
