//! Lexical error type.
//!
//! Errors are collected by the scanner, never thrown: every error site still
//! yields a token and the cursor always moves past it.

use scanr_util::{line_text, Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet, Span};
use thiserror::Error;

/// Category of a lexical error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A literal with a bad shape: numbers, escapes, character literals
    MalformedLiteral,
    /// A string, character, comment or escape running off the end of input
    Unterminated,
    /// A character that starts no token
    UnexpectedCharacter,
    /// A lone character that is half of a known operator (`&`, `|`)
    Suggestion,
}

impl LexErrorKind {
    /// Diagnostic code used when no more specific code was attached.
    pub fn default_code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::MalformedLiteral => DiagnosticCode::E_LEXER_MALFORMED_LITERAL,
            LexErrorKind::Unterminated => DiagnosticCode::E_LEXER_UNTERMINATED,
            LexErrorKind::UnexpectedCharacter | LexErrorKind::Suggestion => {
                DiagnosticCode::E_LEXER_UNEXPECTED_CHAR
            },
        }
    }
}

/// A lexical error with the position of the offending character.
///
/// # Example
///
/// ```
/// use scanr_lex::{LexError, LexErrorKind};
///
/// let err = LexError::new(LexErrorKind::Unterminated, "unterminated string literal", 2, 9, 17);
/// assert_eq!(
///     err.to_string(),
///     "lexical error at line 2, column 9: unterminated string literal"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("lexical error at line {line}, column {column}: {message}")]
pub struct LexError {
    /// Error category
    pub kind: LexErrorKind,
    /// Human-readable description
    pub message: String,
    /// Line of the offending character (1-based)
    pub line: u32,
    /// Column of the offending character (1-based)
    pub column: u32,
    /// Byte offset of the offending character
    pub offset: usize,
    code: DiagnosticCode,
    suggestion: Option<String>,
}

impl LexError {
    /// Creates a new error.
    pub fn new(
        kind: LexErrorKind,
        message: impl Into<String>,
        line: u32,
        column: u32,
        offset: usize,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
            offset,
            code: kind.default_code(),
            suggestion: None,
        }
    }

    /// Overrides the diagnostic code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = code;
        self
    }

    /// Attaches the text the user most likely meant.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        self.code
    }

    /// The suggested replacement, if any.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Converts the error into a diagnostic pointing into `source`.
    ///
    /// The offending line is attached as a snippet when it exists.
    ///
    /// # Example
    ///
    /// ```
    /// use scanr_lex::Scanner;
    ///
    /// let source = "a & b";
    /// let (_, errors) = Scanner::new(source).tokenize_all();
    /// let diag = errors[0].to_diagnostic(source);
    /// assert_eq!(diag.code.map(|c| c.as_str()), Some("E1001".to_string()));
    /// assert_eq!(diag.helps, vec!["did you mean '&&'?".to_string()]);
    /// ```
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let span = Span::point(self.offset, self.line, self.column);
        let mut builder = DiagnosticBuilder::error(self.message.clone())
            .code(self.code)
            .span(span);

        if let Ok(line) = line_text(source, self.line as usize) {
            builder = builder.snippet(SourceSnippet::point(
                line,
                self.line as usize,
                self.column as usize,
            ));
        }

        if let Some(suggestion) = &self.suggestion {
            builder = builder.help(format!("did you mean '{}'?", suggestion));
        }

        if self.kind == LexErrorKind::Unterminated {
            builder = builder.note("the input ended before the construct was closed");
        }

        builder.build()
    }
}
