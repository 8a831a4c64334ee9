//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! diagnostics (errors with their notes and help messages).
//!
//! # Examples
//!
//! ```
//! use scanr_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use scanr_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::error("unexpected character '&'")
//!         .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!         .span(Span::point(0, 1, 1))
//!         .help("did you mean '&&'?")
//!         .build(),
//! );
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use scanr_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Help), "help");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// A lexical error
    Error,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Renders the diagnostic in a multi-line, human-readable form.
    ///
    /// `origin` names the source (usually a file path) in the location line.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanr_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
    /// use scanr_util::Span;
    ///
    /// let diag = DiagnosticBuilder::error("unterminated string literal")
    ///     .code(DiagnosticCode::E_LEXER_UNTERMINATED)
    ///     .span(Span::point(4, 1, 5))
    ///     .build();
    /// let text = diag.render("main.lang");
    /// assert!(text.starts_with("error[E1002]: unterminated string literal"));
    /// assert!(text.contains("--> main.lang:1:5"));
    /// ```
    pub fn render(&self, origin: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };
        out.push_str(&format!(
            "\n  --> {}:{}:{}",
            origin, self.span.line, self.span.column
        ));
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = {}: {}", Level::Note, note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = {}: {}", Level::Help, help));
        }
        out
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics in emission order and provides
/// methods for querying their counts.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
