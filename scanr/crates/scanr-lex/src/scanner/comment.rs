//! Whitespace and comment skipping.

use crate::error::LexErrorKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips whitespace, line comments and block comments.
    ///
    /// Called before scanning each token. Whitespace is space, tab, CR and
    /// LF; a `/` that does not open a comment ends the skip.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' => match self.cursor.peek_char() {
                    '/' => self.skip_line_comment(),
                    '*' => self.skip_block_comment(),
                    _ => return,
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, not including, the next line feed.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips a block comment. The first `*/` closes it; there is no nesting.
    fn skip_block_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                self.report(LexErrorKind::Unterminated, "unterminated block comment");
                return;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char() == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }
}
