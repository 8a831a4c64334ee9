//! Common types and utilities for scanr commands.
//!
//! Every command reads one source file, scans it with the configured
//! extension tables and renders a report. The pieces shared between those
//! reports live here.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use scanr_lex::{Extensions, LexError, Scanner, Token};
use scanr_util::FxHashMap;
use tracing::debug;

use crate::error::{Result, ScanrError};

// ============================================================================
// Output Format
// ============================================================================

/// Output formats for the token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable rows
    #[default]
    Table,
    /// A single JSON document
    Json,
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No lexical errors.
    Passed,
    /// The input had lexical errors.
    Failed {
        /// Number of lexical errors.
        errors: usize,
    },
}

impl Outcome {
    /// Outcome for a scan that reported `errors` lexical errors.
    pub fn from_error_count(errors: usize) -> Self {
        if errors == 0 {
            Outcome::Passed
        } else {
            Outcome::Failed { errors }
        }
    }

    /// Process exit status: 0 when passed, 1 otherwise.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Passed => ExitCode::SUCCESS,
            Outcome::Failed { .. } => ExitCode::from(1),
        }
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// A scanned file: its source, tokens and lexical errors.
#[derive(Debug)]
pub struct ScannedFile {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// File contents.
    pub source: String,
    /// Tokens up to, not including, `EOF`.
    pub tokens: Vec<Token>,
    /// Lexical errors in detection order.
    pub errors: Vec<LexError>,
}

impl ScannedFile {
    /// Reads and scans `path`.
    pub fn load(path: &Path, extensions: &Extensions) -> Result<Self> {
        let source = read_source(path)?;
        Ok(Self::from_source(path, source, extensions))
    }

    /// Scans already loaded `source`.
    pub fn from_source(path: &Path, source: String, extensions: &Extensions) -> Self {
        let (tokens, errors) = Scanner::with_extensions(&source, extensions).tokenize_all();
        debug!(
            file = %path.display(),
            tokens = tokens.len(),
            errors = errors.len(),
            "scanned file"
        );
        Self {
            path: path.to_path_buf(),
            source,
            tokens,
            errors,
        }
    }

    /// Path for display.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Highest line any token starts on, or 1 without tokens.
    pub fn lines_processed(&self) -> u32 {
        self.tokens.iter().map(|t| t.line).max().unwrap_or(1)
    }

    /// Token count per kind name, most frequent first, ties by name.
    pub fn token_distribution(&self) -> Vec<(String, usize)> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in &self.tokens {
            *counts.entry(token.kind.name().to_string()).or_insert(0) += 1;
        }

        let mut distribution: Vec<(String, usize)> = counts.into_iter().collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        distribution
    }

    /// Outcome implied by the lexical errors.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_error_count(self.errors.len())
    }
}

/// Reads a source file as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ScanrError::Input(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(ScanrError::Input(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Writes the `Analyzing file` header shared by the text reports.
pub fn write_header(out: &mut String, path: &str, size: usize) {
    let _ = writeln!(out, "Analyzing file: {}", path);
    let _ = writeln!(out, "File size: {} bytes", size);
    out.push('\n');
}

/// Writes one aligned token row.
pub fn write_token_row(out: &mut String, token: &Token) {
    let _ = writeln!(
        out,
        "Type: {:<15} Literal: {:<15} Line: {:>2} Column: {:>2}",
        token.kind,
        format!("'{}'", token.text),
        token.line,
        token.column
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scanr_lex::TokenKind;

    fn scanned(source: &str) -> ScannedFile {
        ScannedFile::from_source(Path::new("test.lang"), source.to_string(), &Extensions::new())
    }

    #[test]
    fn test_outcome_from_error_count() {
        assert_eq!(Outcome::from_error_count(0), Outcome::Passed);
        assert_eq!(Outcome::from_error_count(3), Outcome::Failed { errors: 3 });
    }

    #[test]
    fn test_lines_processed() {
        assert_eq!(scanned("").lines_processed(), 1);
        assert_eq!(scanned("a\n\nb\n\n").lines_processed(), 3);
    }

    #[test]
    fn test_token_distribution_ordering() {
        let file = scanned("a b ; c ( ) ;");
        assert_eq!(
            file.token_distribution(),
            vec![
                ("IDENT".to_string(), 3),
                ("SEMICOLON".to_string(), 2),
                ("LPAREN".to_string(), 1),
                ("RPAREN".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_extension_kinds_in_distribution() {
        let ext = Extensions::new().with_keyword("match", "MATCH");
        let file = ScannedFile::from_source(Path::new("x"), "match match".to_string(), &ext);
        assert_eq!(file.token_distribution(), vec![("MATCH".to_string(), 2)]);
    }

    #[test]
    fn test_token_row_alignment() {
        let mut out = String::new();
        write_token_row(&mut out, &Token::new(TokenKind::Let, "let", 1, 1));
        assert_eq!(
            out,
            "Type: LET             Literal: 'let'           Line:  1 Column:  1\n"
        );
    }

    #[test]
    fn test_header() {
        let mut out = String::new();
        write_header(&mut out, "a.lang", 12);
        assert_eq!(out, "Analyzing file: a.lang\nFile size: 12 bytes\n\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/nonexistent/input.lang")).unwrap_err();
        assert!(matches!(err, ScanrError::Input(_)));
    }

    #[test]
    fn test_read_source_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_source(dir.path()).unwrap_err();
        assert!(err.to_string().contains("is not a file"));
    }
}
