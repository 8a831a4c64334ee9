//! String, backtick string and character literal scanning.

use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::unicode::hex_digit_value;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a double-quoted string, decoding escape sequences.
    ///
    /// The token text is the decoded content without the quotes. Strings may
    /// span lines. Running off the end of input is reported, and the token
    /// still carries whatever was decoded.
    pub(crate) fn scan_string(&mut self) -> Token {
        self.cursor.advance();

        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                self.report(LexErrorKind::Unterminated, "unterminated string literal");
                break;
            }

            let c = self.cursor.current_char();
            if c == '"' {
                self.cursor.advance();
                break;
            }

            if c == '\\' {
                self.cursor.advance();
                if let Some(decoded) = self.scan_escape() {
                    content.push(decoded);
                }
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        self.make_token(TokenKind::String, content)
    }

    /// Scans a backtick string. The content is taken verbatim.
    pub(crate) fn scan_backtick_string(&mut self) -> Token {
        self.cursor.advance();
        let content_start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                self.report(LexErrorKind::Unterminated, "unterminated backtick string literal");
                let content = self.cursor.slice_from(content_start);
                return self.make_token(TokenKind::BacktickString, content);
            }

            if self.cursor.current_char() == '`' {
                let content = self.cursor.slice_from(content_start);
                self.cursor.advance();
                return self.make_token(TokenKind::BacktickString, content);
            }

            self.cursor.advance();
        }
    }

    /// Scans a character literal: one raw character or one escape sequence
    /// between single quotes.
    ///
    /// A line feed right after the opening quote abandons the literal
    /// without consuming the line feed. A missing closing quote is reported
    /// without resynchronizing.
    pub(crate) fn scan_char(&mut self) -> Token {
        self.cursor.advance();

        if self.cursor.is_at_end() {
            self.report(LexErrorKind::Unterminated, "unterminated character literal");
            return self.make_token(TokenKind::Char, String::new());
        }

        let mut content = String::new();
        match self.cursor.current_char() {
            '\n' => {
                self.report(
                    LexErrorKind::MalformedLiteral,
                    "character literal cannot contain newline",
                );
                return self.make_token(TokenKind::Char, content);
            },
            '\'' => {
                self.report(LexErrorKind::MalformedLiteral, "empty character literal");
                self.cursor.advance();
                return self.make_token(TokenKind::Char, content);
            },
            '\\' => {
                self.cursor.advance();
                if let Some(decoded) = self.scan_escape() {
                    content.push(decoded);
                }
            },
            c => {
                content.push(c);
                self.cursor.advance();
            },
        }

        if !self.cursor.match_char('\'') {
            let kind = if self.cursor.is_at_end() {
                LexErrorKind::Unterminated
            } else {
                LexErrorKind::MalformedLiteral
            };
            self.report(kind, "character literal must be closed with single quote");
        }

        self.make_token(TokenKind::Char, content)
    }

    /// Decodes one escape sequence; the backslash is already consumed.
    ///
    /// Handles `\a \b \f \n \r \t \v \\ \' \" \0` and `\xNN`. An unknown
    /// escape is reported and decodes to the character itself. `None` means
    /// nothing could be decoded.
    pub(crate) fn scan_escape(&mut self) -> Option<char> {
        if self.cursor.is_at_end() {
            self.report(LexErrorKind::Unterminated, "unterminated escape sequence");
            return None;
        }

        let c = self.cursor.current_char();
        let decoded = match c {
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{0B}',
            '\\' => '\\',
            '\'' => '\'',
            '"' => '"',
            '0' => '\0',
            'x' => {
                self.cursor.advance();
                return self.scan_hex_escape();
            },
            other => {
                self.report(
                    LexErrorKind::MalformedLiteral,
                    format!("unknown escape sequence '\\{}'", other),
                );
                other
            },
        };
        self.cursor.advance();
        Some(decoded)
    }

    /// Decodes the two hex digits of a `\x` escape.
    ///
    /// A character that is not a hex digit is consumed with the escape,
    /// unless it is a quote or a line feed, which the enclosing literal
    /// still needs.
    fn scan_hex_escape(&mut self) -> Option<char> {
        let Some(high) = hex_digit_value(self.cursor.current_char()) else {
            self.report(
                LexErrorKind::MalformedLiteral,
                "invalid hex escape sequence: expected hex digit after \\x",
            );
            self.skip_invalid_hex_digit();
            return None;
        };
        self.cursor.advance();

        let Some(low) = hex_digit_value(self.cursor.current_char()) else {
            self.report(
                LexErrorKind::MalformedLiteral,
                "invalid hex escape sequence: expected two hex digits after \\x",
            );
            self.skip_invalid_hex_digit();
            return None;
        };
        self.cursor.advance();

        char::from_u32(high * 16 + low)
    }

    fn skip_invalid_hex_digit(&mut self) {
        if !self.cursor.is_at_end() && !matches!(self.cursor.current_char(), '"' | '\'' | '\n') {
            self.cursor.advance();
        }
    }
}
