//! Lexical validation command.
//!
//! Prints every lexical error as a rendered diagnostic with its source
//! line, then a pass/fail summary.

use std::fmt::Write as _;
use std::path::PathBuf;

use scanr_lex::Extensions;
use scanr_util::Handler;
use tracing::info;

use super::common::{write_header, Outcome, ScannedFile};
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// File to scan.
    pub file: PathBuf,
    /// Extension tables.
    pub extensions: Extensions,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<Outcome> {
    info!("Checking {}", args.file.display());

    let file = ScannedFile::load(&args.file, &args.extensions)?;
    print!("{}", render_check(&file));

    Ok(file.outcome())
}

fn render_check(file: &ScannedFile) -> String {
    let mut out = String::new();
    let path = file.display_path();
    write_header(&mut out, &path, file.source.len());

    let handler = Handler::new();
    for error in &file.errors {
        handler.emit_diagnostic(error.to_diagnostic(&file.source));
    }

    if handler.has_errors() {
        let _ = writeln!(out, "✗ Found {} lexical error(s):", handler.error_count());
        for (i, diagnostic) in handler.diagnostics().iter().enumerate() {
            let _ = writeln!(out, "\n[{}] {}", i + 1, diagnostic.render(&path));
        }
    } else {
        out.push_str("✓ No lexical errors found - file is syntactically valid at lexical level\n");
    }

    out.push_str("\nSummary:\n");
    let _ = writeln!(out, "File: {}", path);
    let _ = writeln!(out, "Lines processed: {}", file.lines_processed());
    let _ = writeln!(out, "Tokens generated: {}", file.tokens.len());
    let _ = writeln!(out, "Unique token types: {}", file.token_distribution().len());
    let _ = writeln!(out, "Lexical errors: {}", handler.error_count());

    match file.outcome() {
        Outcome::Passed => out.push_str("Status: ✓ PASSED\n"),
        Outcome::Failed { .. } => out.push_str("Status: ✗ FAILED\n"),
    }
    out
}
