//! Character cursor for traversing source code.
//!
//! The [`Cursor`] owns the position state while the lexer walks the source:
//! a byte offset into the buffer and the current 1-based line number. It
//! never reads past the end of the buffer; end-of-input is a bounds check,
//! represented to callers as the `'\0'` sentinel character.

/// A cursor for traversing source code character by character.
///
/// The cursor advances over the source one character at a time, handling
/// UTF-8 multi-byte characters correctly (they are consumed whole, never
/// split), and bumps the line counter on every newline it consumes.
///
/// # Example
///
/// ```
/// use ternc_lex::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed. Never copied, never mutated.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character, line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character at the cursor position, or `'\0'` at the end
    /// of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character starting at the given byte offset from the
    /// current position, or `'\0'` if the offset is out of bounds.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Peeks ahead by a byte offset without moving the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use ternc_lex::Cursor;
    ///
    /// let cursor = Cursor::new("!=");
    /// assert_eq!(cursor.peek_char(0), '!');
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Advances the cursor to the next character.
    ///
    /// Newlines increment the line counter. Does nothing at the end of the
    /// source.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances the cursor by the given number of characters, stopping at
    /// the end of the source.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use ternc_lex::Cursor;
    ///
    /// let mut cursor = Cursor::new(">=");
    /// assert!(cursor.match_char('>'));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source slice from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
