//! Scanr CLI - command-line driver for the scanr lexical scanner.
//!
//! This is the main entry point for the scanr CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers, which print their report and decide the exit status.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scanr_lex::Extensions;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_check, run_stats, run_tokens, CheckArgs, Outcome, OutputFormat, StatsArgs, TokensArgs,
};
use config::ExtensionConfig;
use error::{Result, ScanrError};

/// Scanr - tokenize source files and report lexical errors
///
/// Scanr lists tokens with their positions, summarizes token statistics
/// and validates files at the lexical level. Extra keywords, operators and
/// punctuation can be supplied through an extension config file.
#[derive(Parser, Debug)]
#[command(name = "scanr")]
#[command(author = "Scanr Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize source files and report lexical errors", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SCANR_VERBOSE")]
    verbose: bool,

    /// Path to extension configuration file (JSON or TOML)
    #[arg(short, long, global = true, env = "SCANR_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SCANR_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the scanr CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every token with its position
    ///
    /// Scans the file token by token and prints each token's type, text,
    /// line and column, followed by any lexical errors.
    Tokens(TokensCommand),

    /// Summarize token statistics
    ///
    /// Prints token and error totals, the distribution of token types and
    /// the number of lines processed.
    Stats(FileCommand),

    /// Validate a file at the lexical level
    ///
    /// Renders every lexical error as a diagnostic and exits with status 1
    /// if any were found.
    Check(FileCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan
    file: PathBuf,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

/// Arguments for subcommands that take a single file.
#[derive(Parser, Debug)]
struct FileCommand {
    /// Source file to scan
    file: PathBuf,
}

/// Main entry point for the scanr CLI.
///
/// Parses command-line arguments, initializes logging, loads the extension
/// configuration and dispatches to the selected command. Lexical errors in
/// the input give exit status 1.
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let extensions = load_config(cli.config.as_deref()).to_extensions();

    // Execute the selected command
    let outcome = execute_command(cli.command, extensions)?;
    if let Outcome::Failed { errors } = outcome {
        debug!("{} lexical error(s), exiting with status 1", errors);
    }
    Ok(outcome.exit_code())
}

/// Initialize the logging system.
///
/// Logs go to stderr so reports on stdout stay clean. `RUST_LOG` takes
/// precedence over `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ScanrError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load the extension configuration.
///
/// A config that cannot be loaded is reported as a warning and scanning
/// continues with the default tables.
fn load_config(config_path: Option<&Path>) -> ExtensionConfig {
    let loaded = match config_path {
        Some(path) => ExtensionConfig::load_from_path(path),
        None => ExtensionConfig::load(),
    };

    let config = loaded.unwrap_or_else(|e| {
        warn!("Could not load extension config, using default tables: {}", e);
        ExtensionConfig::default()
    });
    if config.is_empty() {
        debug!("no extension entries configured");
    }
    config
}

/// Execute the selected command.
fn execute_command(command: Commands, extensions: Extensions) -> Result<Outcome> {
    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            file: args.file,
            format: args.format,
            extensions,
        }),
        Commands::Stats(args) => run_stats(StatsArgs {
            file: args.file,
            extensions,
        }),
        Commands::Check(args) => run_check(CheckArgs {
            file: args.file,
            extensions,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["scanr", "tokens", "main.lang"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("main.lang"));
            assert_eq!(args.format, OutputFormat::Table);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_json() {
        let cli = Cli::parse_from(["scanr", "tokens", "main.lang", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["scanr", "tokens", "main.lang", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::parse_from(["scanr", "stats", "main.lang"]);
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["scanr", "check", "main.lang"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("main.lang"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["scanr", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["scanr", "--verbose", "stats", "a.lang"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["scanr", "check", "a.lang", "--config", "ext.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("ext.json")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["scanr", "--no-color", "tokens", "a.lang"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_load_config_falls_back_to_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/scanr.json")));
        assert!(config.is_empty());
    }

    #[test]
    fn test_load_config_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("ext.json");
        std::fs::write(&path, r#"{ "additionalKeywords": { "match": "MATCH" } }"#).unwrap();

        let extensions = load_config(Some(&path)).to_extensions();
        assert_eq!(extensions.keywords["match"], "MATCH");
    }
}
