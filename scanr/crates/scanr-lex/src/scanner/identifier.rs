//! Identifier and keyword scanning.

use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier or keyword.
    ///
    /// Identifiers start with a letter or underscore and continue with
    /// letters, digits or underscores. The lexeme is then looked up in the
    /// keyword table, case-sensitively.
    ///
    /// Called on anything else, it reports an error and returns an empty
    /// `ILLEGAL` token without consuming input.
    pub fn scan_identifier(&mut self) -> Token {
        self.mark_token_start();
        if !is_ident_start(self.cursor.current_char()) {
            self.report(
                LexErrorKind::UnexpectedCharacter,
                "identifier must start with a letter or underscore",
            );
            return self.make_token(TokenKind::Illegal, String::new());
        }

        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = self
            .tables
            .keyword(text)
            .cloned()
            .unwrap_or(TokenKind::Ident);
        self.make_token(kind, text)
    }
}
