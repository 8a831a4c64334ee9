//! Core scanner implementation.
//!
//! This module contains the Scanner struct, top-level dispatch and the
//! error collection shared by the other scanner components.

use std::sync::Arc;

use scanr_util::DiagnosticCode;
use tracing::trace;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::tables::{Extensions, LexTables};
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Pull-based scanner over an immutable source buffer.
///
/// Errors never stop scanning: each one is recorded and the scanner moves
/// on, so a token is always produced. Once the input is exhausted every call
/// to [`Scanner::next_token`] returns the same `EOF` token.
///
/// # Example
///
/// ```
/// use scanr_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("let x = 42;");
/// assert_eq!(scanner.next_token().kind, TokenKind::Let);
/// assert_eq!(scanner.next_token().text, "x");
///
/// let kinds: Vec<TokenKind> = scanner.map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::Assign, TokenKind::Number, TokenKind::Semicolon]);
/// ```
///
/// The per-category scanning routines are internal; tokens only come out of
/// [`Scanner::next_token`] and the iterator built on it.
///
/// ```compile_fail
/// let mut scanner = scanr_lex::Scanner::new("+");
/// scanner.scan_number();
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Lookup tables, shared unless extensions were applied.
    pub(crate) tables: Arc<LexTables>,

    /// Errors in detection order.
    errors: Vec<LexError>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default tables.
    pub fn new(source: &'a str) -> Self {
        Self::with_tables(source, LexTables::defaults())
    }

    /// Creates a scanner whose tables are the defaults plus `extensions`.
    ///
    /// The merge happens here, once, before any scanning.
    pub fn with_extensions(source: &'a str, extensions: &Extensions) -> Self {
        if extensions.is_empty() {
            return Self::new(source);
        }
        Self::with_tables(source, Arc::new(LexTables::with_extensions(extensions)))
    }

    /// Creates a scanner over prepared tables.
    ///
    /// Lets several scans share one set of extended tables.
    pub fn with_tables(source: &'a str, tables: Arc<LexTables>) -> Self {
        Self {
            cursor: Cursor::new(source),
            tables,
            errors: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character: identifiers, numbers, extension operators, built-in
    /// operators, quoted literals and finally punctuation. At end of input
    /// the result is an `EOF` token with empty text.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.mark_token_start();

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof, String::new());
        }

        let c = self.cursor.current_char();

        if is_ident_start(c) {
            return self.scan_identifier();
        }

        if c.is_ascii_digit() {
            return self.scan_number();
        }

        if let Some(token) = self.scan_extension_operator() {
            return token;
        }

        if let Some(token) = self.scan_operator() {
            return token;
        }

        match c {
            '"' => self.scan_string(),
            '`' => self.scan_backtick_string(),
            '\'' => self.scan_char(),
            _ => self.scan_punctuation(),
        }
    }

    /// Scans the whole input.
    ///
    /// Returns every token up to, but not including, `EOF`, together with
    /// the errors collected along the way.
    ///
    /// # Example
    ///
    /// ```
    /// use scanr_lex::Scanner;
    ///
    /// let (tokens, errors) = Scanner::new("x = 123abc;").tokenize_all();
    /// assert_eq!(tokens.len(), 4);
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn tokenize_all(mut self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if token.is_eof() {
                break;
            }
            tokens.push(token);
        }
        (tokens, self.errors)
    }

    /// Returns true if any lexical error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors recorded so far, in detection order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// The tables this scanner consults.
    pub fn tables(&self) -> &Arc<LexTables> {
        &self.tables
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Records the cursor position as the start of the next token.
    pub(crate) fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token positioned at the start of the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind, text: impl Into<String>) -> Token {
        Token::new(kind, text, self.token_start_line, self.token_start_column)
    }

    /// Builds a token whose text is the source consumed since the lexeme started.
    pub(crate) fn token_from_lexeme(&self, kind: TokenKind) -> Token {
        let text = self.cursor.slice_from(self.token_start);
        self.make_token(kind, text)
    }

    /// Creates an error at the cursor's current character.
    pub(crate) fn error_here(&self, kind: LexErrorKind, message: impl Into<String>) -> LexError {
        LexError::new(
            kind,
            message,
            self.cursor.line(),
            self.cursor.column(),
            self.cursor.position(),
        )
    }

    /// Records an error.
    pub(crate) fn push_error(&mut self, error: LexError) {
        trace!(
            line = error.line,
            column = error.column,
            code = %error.code(),
            "{}",
            error.message
        );
        self.errors.push(error);
    }

    /// Records an error at the cursor's current character.
    pub(crate) fn report(&mut self, kind: LexErrorKind, message: impl Into<String>) {
        let error = self.error_here(kind, message);
        self.push_error(error);
    }

    /// Records a malformed numeric literal at the cursor's current character.
    pub(crate) fn report_number_error(&mut self, message: impl Into<String>) {
        let error = self
            .error_here(LexErrorKind::MalformedLiteral, message)
            .with_code(DiagnosticCode::E_LEXER_INVALID_NUMBER);
        self.push_error(error);
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eof_is_idempotent() {
        let mut scanner = Scanner::new("x");
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);

        let first = scanner.next_token();
        assert!(first.is_eof());
        assert_eq!(first.text, "");
        for _ in 0..5 {
            assert_eq!(scanner.next_token(), first);
        }
        assert!(!scanner.has_errors());
    }

    #[test]
    fn test_eof_position() {
        let mut scanner = Scanner::new("ab\n  ");
        scanner.next_token();
        let eof = scanner.next_token();
        assert_eq!((eof.line, eof.column), (2, 3));
    }

    #[test]
    fn test_eof_after_error_adds_nothing() {
        let mut scanner = Scanner::new("\"open");
        scanner.next_token();
        assert_eq!(scanner.errors().len(), 1);
        scanner.next_token();
        scanner.next_token();
        assert_eq!(scanner.errors().len(), 1);
    }

    #[test]
    fn test_iterator_stops_at_eof() {
        let tokens: Vec<Token> = Scanner::new("a b c").collect();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_with_empty_extensions_shares_defaults() {
        let scanner = Scanner::with_extensions("x", &Extensions::new());
        assert!(Arc::ptr_eq(scanner.tables(), &LexTables::defaults()));
    }

    #[test]
    fn test_with_extensions_gets_private_tables() {
        let ext = Extensions::new().with_keyword("match", "MATCH");
        let scanner = Scanner::with_extensions("match", &ext);
        assert!(!Arc::ptr_eq(scanner.tables(), &LexTables::defaults()));
    }

    #[test]
    fn test_shared_extended_tables() {
        let ext = Extensions::new().with_punctuation("@", "AT");
        let tables = Arc::new(LexTables::with_extensions(&ext));

        for source in ["@a", "b@"] {
            let (tokens, errors) = Scanner::with_tables(source, tables.clone()).tokenize_all();
            assert!(errors.is_empty());
            assert!(tokens.iter().any(|t| t.kind == TokenKind::Extended("AT".into())));
        }
    }

    #[test]
    fn test_line_and_column_accessors() {
        let mut scanner = Scanner::new("a\nbc");
        scanner.next_token();
        scanner.next_token();
        assert_eq!((scanner.line(), scanner.column()), (2, 3));
    }

    #[test]
    fn test_scanner_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Scanner<'static>>();
    }
}
