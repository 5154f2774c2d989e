//! # handscope CLI Library
//!
//! Command-line front end for the handscope poker hand evaluator. It turns
//! card labels into cards, asks the engine for the best five-card hand and
//! renders the result.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["handscope", "eval", "--hole", "As Ks", "--board", "2s 5s 9s 4h 7d"];
//! let code = handscope_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Find the best hand among 5 to 7 cards
//! - `compare`: Decide which of two card sets holds the stronger hand
//! - `deck`: List all card labels
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HandscopeCli};
use commands::{
    EvalInput, handle_cfg_command, handle_compare_command, handle_deck_command,
    handle_eval_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "compare", "deck", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments, resolves configuration, installs logging and
/// dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Available Commands
///
/// - `eval [CARDS].. [--hole CARDS] [--board CARDS] [--format text|json]`
/// - `compare --a CARDS --b CARDS [--format text|json]`
/// - `deck`
/// - `cfg`
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandscopeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => return report(err, &CliError::from(e)),
    };
    logging::init(&resolved.config.log);
    let config = &resolved.config;

    let result = match cli.cmd {
        Commands::Eval {
            cards,
            hole,
            board,
            format,
        } => handle_eval_command(
            EvalInput {
                cards: &cards,
                hole: hole.as_deref(),
                board: board.as_deref(),
            },
            format.unwrap_or(config.format),
            config.unicode,
            out,
            err,
        ),
        Commands::Compare { a, b, format } => handle_compare_command(
            &a,
            &b,
            format.unwrap_or(config.format),
            config.unicode,
            out,
        ),
        Commands::Deck => handle_deck_command(config.unicode, out),
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => report(err, &e),
    }
}

fn report(err: &mut dyn Write, e: &CliError) -> i32 {
    tracing::debug!(error = %e, "command failed");
    // Nothing more can be done if stderr is gone.
    let _ = ui::write_error(err, &e.to_string());
    exit_code::ERROR
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "handscope poker hand evaluator")?;
    writeln!(err, "Usage: handscope <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: handscope --help")
}
