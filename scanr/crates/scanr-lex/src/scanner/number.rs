//! Numeric literal scanning.
//!
//! Handles decimal integers and floats with optional exponents, plus the
//! prefixed hexadecimal (`0x`), binary (`0b`) and octal (`0o`) forms and
//! legacy octal (`017`). A literal that produced any error comes back as an
//! `ILLEGAL` token carrying everything that was consumed.

use crate::token::{Token, TokenKind};
use crate::unicode::{is_binary_digit, is_ident_continue, is_octal_digit};
use crate::Scanner;

/// Base of a prefixed integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Radix {
    Hex,
    Binary,
    Octal,
}

impl Radix {
    fn from_prefix(c: char) -> Option<Radix> {
        match c {
            'x' | 'X' => Some(Radix::Hex),
            'b' | 'B' => Some(Radix::Binary),
            'o' | 'O' => Some(Radix::Octal),
            _ => None,
        }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Radix::Hex => c.is_ascii_hexdigit(),
            Radix::Binary => is_binary_digit(c),
            Radix::Octal => is_octal_digit(c),
        }
    }

    /// Long name used in messages, e.g. "hexadecimal".
    fn name(self) -> &'static str {
        match self {
            Radix::Hex => "hexadecimal",
            Radix::Binary => "binary",
            Radix::Octal => "octal",
        }
    }

    /// Short digit name used in messages, e.g. "hex".
    fn digit_name(self) -> &'static str {
        match self {
            Radix::Hex => "hex",
            Radix::Binary => "binary",
            Radix::Octal => "octal",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Radix::Hex => "0x",
            Radix::Binary => "0b",
            Radix::Octal => "0o",
        }
    }
}

impl<'a> Scanner<'a> {
    /// Scans a numeric literal starting at an ASCII digit.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `3.14`, `1e10`, `2.5E-3`
    /// - Hexadecimal: `0xFF`
    /// - Binary: `0b1010`
    /// - Octal: `0o777`, and legacy `0755`
    ///
    /// A `.` is only part of the number when a digit follows it, so `0.5`
    /// is decimal and `1.foo` is `1`, `.`, `foo`.
    pub(crate) fn scan_number(&mut self) -> Token {
        let errors_before = self.errors().len();

        let next = self.cursor.peek_char();
        if self.cursor.current_char() == '0' {
            if let Some(radix) = Radix::from_prefix(next) {
                self.scan_prefixed(radix);
            } else if ('1'..='7').contains(&next) {
                self.scan_legacy_octal();
            } else {
                self.scan_decimal();
            }
        } else {
            self.scan_decimal();
        }

        let kind = if self.errors().len() > errors_before {
            TokenKind::Illegal
        } else {
            TokenKind::Number
        };
        self.token_from_lexeme(kind)
    }

    fn scan_decimal(&mut self) {
        self.consume_while(|c| c.is_ascii_digit());

        if self.cursor.current_char() == '.' && self.cursor.peek_char().is_ascii_digit() {
            self.cursor.advance();
            self.consume_while(|c| c.is_ascii_digit());
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }

            if self.cursor.current_char().is_ascii_digit() {
                self.consume_while(|c| c.is_ascii_digit());
            } else {
                self.report_number_error("invalid scientific notation: exponent must contain digits");
            }
        }

        if is_ident_continue(self.cursor.current_char()) {
            self.report_number_error("invalid number: numbers cannot be followed by letters");
            self.consume_while(is_ident_continue);
        }
    }

    fn scan_prefixed(&mut self, radix: Radix) {
        self.cursor.advance();
        self.cursor.advance();

        if !radix.accepts(self.cursor.current_char()) {
            if is_ident_continue(self.cursor.current_char()) {
                self.report_invalid_digits(radix);
            } else {
                self.report_number_error(format!(
                    "invalid {} number: must contain at least one {} digit after {}",
                    radix.name(),
                    radix.digit_name(),
                    radix.prefix()
                ));
            }
            return;
        }

        self.consume_while(|c| radix.accepts(c));
        if is_ident_continue(self.cursor.current_char()) {
            self.report_invalid_digits(radix);
        }
    }

    fn scan_legacy_octal(&mut self) {
        self.consume_while(is_octal_digit);
        if is_ident_continue(self.cursor.current_char()) {
            self.report_invalid_digits(Radix::Octal);
        }
    }

    /// Reports stray letters or digits after a prefixed body and skips them.
    fn report_invalid_digits(&mut self, radix: Radix) {
        self.report_number_error(format!(
            "invalid {} number: contains non-{} characters",
            radix.name(),
            radix.digit_name()
        ));
        self.consume_while(is_ident_continue);
    }

    fn consume_while(&mut self, accept: impl Fn(char) -> bool) {
        while !self.cursor.is_at_end() && accept(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }
}
