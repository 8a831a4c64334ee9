//! Token listing command.
//!
//! Walks the file one `next_token` call at a time and prints every token
//! with its position, followed by the lexical errors.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use scanr_lex::{Extensions, LexError, Scanner, Token};
use serde::Serialize;
use tracing::{debug, info};

use super::common::{read_source, write_header, write_token_row, Outcome, OutputFormat};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// File to scan.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Extension tables.
    pub extensions: Extensions,
}

/// JSON form of one token.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    literal: &'a str,
    line: u32,
    column: u32,
}

/// JSON form of one lexical error.
#[derive(Debug, Serialize)]
struct ErrorRecord<'a> {
    code: String,
    kind: String,
    message: &'a str,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

/// JSON document printed by `--format json`.
#[derive(Debug, Serialize)]
struct TokenListing<'a> {
    file: String,
    size: usize,
    tokens: Vec<TokenRecord<'a>>,
    errors: Vec<ErrorRecord<'a>>,
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<Outcome> {
    info!("Listing tokens of {}", args.file.display());

    let source = read_source(&args.file)?;
    let (tokens, errors) = collect_tokens(&source, &args.extensions);
    debug!(tokens = tokens.len(), errors = errors.len(), "token pass finished");

    let output = match args.format {
        OutputFormat::Table => render_table(&args.file, &source, &tokens, &errors),
        OutputFormat::Json => render_json(&args.file, &source, &tokens, &errors)?,
    };
    print!("{}", output);

    Ok(Outcome::from_error_count(errors.len()))
}

/// Pulls tokens one at a time until `EOF`.
fn collect_tokens(source: &str, extensions: &Extensions) -> (Vec<Token>, Vec<LexError>) {
    let mut scanner = Scanner::with_extensions(source, extensions);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        if token.is_eof() {
            break;
        }
        tokens.push(token);
    }
    (tokens, scanner.errors().to_vec())
}

fn render_table(path: &Path, source: &str, tokens: &[Token], errors: &[LexError]) -> String {
    let mut out = String::new();
    write_header(&mut out, &path.display().to_string(), source.len());

    for token in tokens {
        write_token_row(&mut out, token);
    }

    if !errors.is_empty() {
        out.push_str("\nLexical Errors:\n");
        for error in errors {
            let _ = writeln!(out, "  {}", error);
        }
    }

    let _ = writeln!(out, "\nProcessed: {} tokens", tokens.len());
    out
}

fn render_json(path: &Path, source: &str, tokens: &[Token], errors: &[LexError]) -> Result<String> {
    let listing = TokenListing {
        file: path.display().to_string(),
        size: source.len(),
        tokens: tokens
            .iter()
            .map(|t| TokenRecord {
                kind: t.kind.name(),
                literal: &t.text,
                line: t.line,
                column: t.column,
            })
            .collect(),
        errors: errors
            .iter()
            .map(|e| ErrorRecord {
                code: e.code().to_string(),
                kind: format!("{:?}", e.kind),
                message: &e.message,
                line: e.line,
                column: e.column,
                suggestion: e.suggestion(),
            })
            .collect(),
    };

    let mut json = serde_json::to_string_pretty(&listing)?;
    json.push('\n');
    Ok(json)
}
