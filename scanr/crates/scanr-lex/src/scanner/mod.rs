//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct, dispatch and error collection
//! - `comment` - Whitespace and comment skipping
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Numeric literal scanning
//! - `string` - String, backtick string, character and escape scanning
//! - `operator` - Operator and punctuation scanning

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Scanner;
