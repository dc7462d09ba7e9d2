//! Edge case and property tests for ternc-lex

use proptest::prelude::*;

use crate::{Lexer, TokenKind, TokenText};

fn lex_kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).map(|t| t.kind).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(lex_kinds("").is_empty());
}

#[test]
fn test_edge_single_char_ident() {
    let token = Lexer::new("x").next_token();
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.text, TokenText::Source("x"));
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let token = Lexer::new(&name).next_token();
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(token.text.as_str().len(), 10_000);
}

#[test]
fn test_edge_long_digit_run() {
    let digits = "9".repeat(1_000);
    let token = Lexer::new(&digits).next_token();
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.text, TokenText::Source(digits.as_str()));
}

#[test]
fn test_edge_nested_delimiters() {
    let kinds = lex_kinds("((()))");
    assert_eq!(
        kinds.iter().filter(|k| **k == TokenKind::LParen).count(),
        3
    );
    assert_eq!(
        kinds.iter().filter(|k| **k == TokenKind::RParen).count(),
        3
    );
}

#[test]
fn test_edge_adjacent_tokens_no_whitespace() {
    assert_eq!(
        lex_kinds("var(x)"),
        vec![
            TokenKind::Var,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen
        ]
    );
}

#[test]
fn test_edge_consecutive_bangs() {
    assert_eq!(lex_kinds("!!"), vec![TokenKind::Bang, TokenKind::Bang]);
}

#[test]
fn test_edge_string_containing_comment_marker() {
    let token = Lexer::new("\"// not a comment\"").next_token();
    assert_eq!(token.kind, TokenKind::Str);
}

#[test]
fn test_edge_string_containing_operators() {
    let token = Lexer::new("\"a != b\"").next_token();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.text, TokenText::Source("\"a != b\""));
}

#[test]
fn test_edge_non_ascii_is_unexpected() {
    let mut lexer = Lexer::new("λ var");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.text, TokenText::Diagnostic("unexpected character"));
    // The multi-byte character is consumed whole; scanning continues.
    assert_eq!(lexer.next_token().kind, TokenKind::Var);
}

#[test]
fn test_edge_non_ascii_inside_string_is_fine() {
    let token = Lexer::new("\"héllo\"").next_token();
    assert_eq!(token.kind, TokenKind::Str);
}

#[test]
fn test_edge_crlf_line_endings() {
    let mut lexer = Lexer::new("var\r\nx");
    assert_eq!(lexer.next_token().line, 1);
    assert_eq!(lexer.next_token().line, 2);
}

#[test]
fn test_edge_every_error_consumes_input() {
    // A run of lone ampersands produces one error each, then Eof.
    let mut lexer = Lexer::new("&&&");
    assert_eq!(lexer.next_token().kind, TokenKind::AndAnd);
    assert_eq!(lexer.next_token().kind, TokenKind::Error);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

// ==================== PROPERTIES ====================

proptest! {
    #[test]
    fn prop_scanning_terminates_and_never_panics(source in ".{0,200}") {
        let mut lexer = Lexer::new(&source);
        let mut count = 0;
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }
            count += 1;
            // Every non-Eof token consumes at least one character.
            prop_assert!(count <= source.len() + 1);
        }
    }

    #[test]
    fn prop_eof_stays_eof(source in ".{0,50}") {
        let mut lexer = Lexer::new(&source);
        while !lexer.next_token().is_eof() {}
        for _ in 0..5 {
            prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn prop_digit_runs_scan_as_one_number(digits in "[0-9]{1,18}") {
        let mut lexer = Lexer::new(&digits);
        let token = lexer.next_token();
        prop_assert_eq!(token.kind, TokenKind::Number);
        prop_assert_eq!(token.text.as_str(), digits.as_str());
        prop_assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn prop_identifiers_keep_their_spelling(ident in "[a-zA-Z_][a-zA-Z0-9_]{0,20}") {
        let mut lexer = Lexer::new(&ident);
        let token = lexer.next_token();
        prop_assert!(token.kind == TokenKind::Ident || token.kind.is_keyword());
        prop_assert_eq!(token.text.as_str(), ident.as_str());
    }

    #[test]
    fn prop_terminated_strings_scan_whole(content in "[a-z ]{0,30}") {
        let source = format!("\"{content}\"");
        let mut lexer = Lexer::new(&source);
        let token = lexer.next_token();
        prop_assert_eq!(token.kind, TokenKind::Str);
        prop_assert_eq!(token.text.as_str(), source.as_str());
    }
}
