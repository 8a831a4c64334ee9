//! scanr-lex - Hand-Written Lexical Scanner
//!
//! This crate turns UTF-8 source text into a sequence of classified tokens
//! with line/column positions, collecting lexical errors instead of
//! stopping on them.
//!
//! # Example Usage
//!
//! ```
//! use scanr_lex::{Scanner, TokenKind};
//!
//! let (tokens, errors) = Scanner::new("let x = 42 + 3.14;").tokenize_all();
//! assert!(errors.is_empty());
//!
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind.clone()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Let,
//!         TokenKind::Ident,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Plus,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`scanner`] - The scanning algorithm
//! - [`tables`] - Keyword/operator/punctuation tables and extensions
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical error type
//! - [`unicode`] - Character classification
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `let`, `const`, `fn`, `if`, `else`, `while`, `for`, `return`, `break`,
//! `continue`, `true`, `false`, `null`, and the type keywords `int`,
//! `float`, `string`, `bool`, `char`.
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14`, `1e10`, `0xFF`, `0b1010`, `0o777`, `0755`
//! - **String**: `"hello\n"`, with escapes decoded
//! - **Backtick string**: `` `raw \n text` ``, taken verbatim
//! - **Character**: `'a'`, `'\x41'`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`
//!
//! ## Punctuation
//!
//! `(` `)` `{` `}` `[` `]` `,` `;` `:` `.`
//!
//! Further keywords, operators and punctuation can be supplied through
//! [`Extensions`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod scanner;
pub mod tables;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind};
pub use scanner::Scanner;
pub use tables::{ExtensionOperator, Extensions, LexTables, OperatorDef};
pub use token::{Token, TokenKind};
