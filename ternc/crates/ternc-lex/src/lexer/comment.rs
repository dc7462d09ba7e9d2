//! Whitespace and comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and line comments.
    ///
    /// Called before scanning each token, so a token never starts at
    /// whitespace or inside a comment. Newlines increment the line counter
    /// as the cursor consumes them.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '/' => {
                    self.skip_line_comment();
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment, from `//` to end of line or end of input.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{TokenKind, TokenText};
    use crate::Lexer;

    #[test]
    fn test_skip_spaces_and_tabs() {
        let mut lexer = Lexer::new("  \t  var");
        assert_eq!(lexer.next_token().kind, TokenKind::Var);
    }

    #[test]
    fn test_skip_carriage_return() {
        let mut lexer = Lexer::new("\r\nvar");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Var);
        assert_eq!(token.line, 2);
    }

    #[test]
    fn test_comment_consumed_to_end_of_line() {
        let mut lexer = Lexer::new("// comment\nvar");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Var);
        assert_eq!(token.line, 2);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let mut lexer = Lexer::new("var // trailing");
        assert_eq!(lexer.next_token().kind, TokenKind::Var);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_comment_only_source() {
        let mut lexer = Lexer::new("// nothing here");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_comment_never_spans_lines() {
        let mut lexer = Lexer::new("// first\nsecond");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.text, TokenText::Source("second"));
    }

    #[test]
    fn test_single_slash_is_not_a_comment() {
        let mut lexer = Lexer::new("a / b");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        assert_eq!(lexer.next_token().kind, TokenKind::Slash);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_whitespace_only_source() {
        let mut lexer = Lexer::new("   \n\t  \n  ");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.line, 3);
    }
}
