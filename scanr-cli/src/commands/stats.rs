//! Token statistics command.

use std::fmt::Write as _;
use std::path::PathBuf;

use scanr_lex::Extensions;
use tracing::info;

use super::common::{write_header, Outcome, ScannedFile};
use crate::error::Result;

/// Arguments for the stats command.
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// File to scan.
    pub file: PathBuf,
    /// Extension tables.
    pub extensions: Extensions,
}

/// Run the stats command.
pub fn run_stats(args: StatsArgs) -> Result<Outcome> {
    info!("Collecting token statistics for {}", args.file.display());

    let file = ScannedFile::load(&args.file, &args.extensions)?;
    print!("{}", render_stats(&file));

    Ok(file.outcome())
}

fn render_stats(file: &ScannedFile) -> String {
    let mut out = String::new();
    write_header(&mut out, &file.display_path(), file.source.len());

    let distribution = file.token_distribution();

    let _ = writeln!(out, "Total tokens: {}", file.tokens.len());
    let _ = writeln!(out, "Total errors: {}", file.errors.len());

    out.push_str("\nToken distribution:\n");
    for (name, count) in &distribution {
        let _ = writeln!(out, "  {:<15}: {}", name, count);
    }

    out.push('\n');
    let _ = writeln!(out, "Lines processed: {}", file.lines_processed());
    let _ = writeln!(out, "Unique token types: {}", distribution.len());
    out
}
