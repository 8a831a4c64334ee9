//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source characters. It decodes UTF-8 one code
//! point at a time and tracks line/column information for tokens and errors.

/// A cursor over an immutable source buffer.
///
/// The current character is the code point at `position`. At end of input
/// the cursor reports the `'\0'` sentinel; callers that must tell a real
/// NUL apart from end of input use [`Cursor::is_at_end`].
///
/// # Example
///
/// ```
/// use scanr_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x = 42;");
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'e');
/// assert_eq!(cursor.peek_char(), 't');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,

    /// Line of the current character (1-based).
    line: u32,

    /// Column of the current character (1-based, in code points).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(self.position)
    }

    /// Returns the character after the current one without consuming
    /// anything, or `'\0'` if there is none.
    ///
    /// # Example
    ///
    /// ```
    /// use scanr_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("αβ");
    /// assert_eq!(cursor.peek_char(), 'β');
    /// assert_eq!(Cursor::new("a").peek_char(), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        let width = self.current_char().len_utf8();
        self.char_at(self.position + width)
    }

    #[inline]
    fn char_at(&self, pos: usize) -> char {
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor past the current character.
    ///
    /// Stepping over a line feed moves to column 1 of the next line; any
    /// other character moves one column right. Does nothing at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use scanr_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// assert_eq!((cursor.line(), cursor.column()), (1, 2));
    /// cursor.advance();
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let c = self.current_char();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// The `'\0'` sentinel never matches at end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use scanr_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the line of the current character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the current character (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the byte offset of the current character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use scanr_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
