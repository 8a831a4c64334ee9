//! scanr-util - Source Locations and Diagnostics
//!
//! Foundation types shared by the scanner and its command-line driver:
//!
//! - [`span`] - byte ranges with 1-based line/column information, plus
//!   a helper for pulling a source line out of a buffer
//! - [`diagnostic`] - severity levels, diagnostic codes, the fluent
//!   [`DiagnosticBuilder`] and the collecting [`Handler`]
//! - [`error`] - the error type for line lookups
//!
//! # Example
//!
//! ```
//! use scanr_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::error("unexpected character '#'")
//!         .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!         .span(Span::point(3, 1, 4))
//!         .build(),
//! );
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{line_text, Span};

/// Fast non-cryptographic hash map used for lookup tables.
pub use rustc_hash::FxHashMap;
