//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range with the human-readable line/column of its
//! first character. Lexical errors are reported as point spans.
//!
//! # Examples
//!
//! ```
//! use scanr_util::span::Span;
//!
//! let point = Span::point(7, 2, 3);
//! assert_eq!(point.start, point.end);
//! assert_eq!((point.line, point.column), (2, 3));
//! ```

use crate::error::{SourceError, SourceResult};

/// Source location span
///
/// # Examples
///
/// ```
/// use scanr_util::span::Span;
///
/// let span = Span::new(4, 6, 1, 5);
/// assert_eq!(span.start, 4);
/// assert_eq!(span.column, 5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in code points)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use scanr_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.line, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use scanr_util::span::Span;
    ///
    /// let point = Span::point(12, 2, 5);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
///
/// # Examples
///
/// ```
/// use scanr_util::span::line_text;
///
/// let source = "let a = 1;\nlet b = 2;\n";
/// assert_eq!(line_text(source, 2).unwrap(), "let b = 2;");
/// assert!(line_text(source, 9).is_err());
/// ```
pub fn line_text(source: &str, line: usize) -> SourceResult<&str> {
    let max_lines = source.lines().count();
    if line == 0 {
        return Err(SourceError::InvalidLineNumber { line, max_lines });
    }
    source
        .lines()
        .nth(line - 1)
        .ok_or(SourceError::InvalidLineNumber { line, max_lines })
}
