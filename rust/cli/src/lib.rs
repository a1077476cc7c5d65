//! # Bingo CLI Library
//!
//! This library provides the command-line interface for the bingo card
//! engine. It exposes subcommands for playing, inspecting, and simulating
//! bingo cards.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["bingo", "card", "--seed", "42"];
//! let code = bingo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play an interactive session on a freshly generated card
//! - `card`: Generate a single card and print it
//! - `sim`: Simulate full games and report draws-to-win statistics
//! - `cfg`: Display current configuration settings
//! - `rng`: Verify RNG properties

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{BingoCli, Commands};

use commands::{
    handle_card_command, handle_cfg_command, handle_play_command, handle_rng_command,
    handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
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
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["bingo", "rng", "--seed", "42"];
/// let code = bingo_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "card", "sim", "cfg", "rng"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = BingoCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first, then a short command list
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "");
                    write_or_exit!(err, "Bingo CLI");
                    write_or_exit!(err, "Usage: bingo <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: bingo --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play { seed, log } => {
                // Use stdin for real input (supports both TTY and piped stdin)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                match handle_play_command(seed, log, out, err, &mut stdin_lock) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        write_or_exit!(err, "Error: {}", e);
                        exit_code::ERROR
                    }
                }
            }
            Commands::Card { seed } => match handle_card_command(seed, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Sim {
                games,
                seed,
                output,
            } => match handle_sim_command(games, seed, output, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
            Commands::Rng { seed } => match handle_rng_command(seed, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfg_command_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("seed"));
    }

    #[test]
    fn test_rng_command_dispatch_with_seed() {
        let mut out = Vec::new();

        let result = handle_rng_command(Some(42), &mut out);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("RNG"));
    }

    #[test]
    fn test_card_command_dispatch_with_seed() {
        let mut out = Vec::new();

        let result = handle_card_command(Some(42), &mut out);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(!output.is_empty());
    }

    #[test]
    fn test_play_command_dispatch_via_handler() {
        use std::io::Cursor;

        let mut out = Vec::new();
        let mut err = Vec::new();
        let input = "quit\n";
        let mut stdin = Cursor::new(input.as_bytes());

        let result = handle_play_command(Some(42), None, &mut out, &mut err, &mut stdin);
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_module_exists_and_exports_bingo_cli() {
        use crate::cli::BingoCli;

        let result = BingoCli::try_parse_from(["bingo", "cfg"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_types_preserve_all_5_subcommands() {
        let commands = vec![
            vec!["bingo", "play", "--seed", "1"],
            vec!["bingo", "card"],
            vec!["bingo", "sim", "--games", "2"],
            vec!["bingo", "cfg"],
            vec!["bingo", "rng"],
        ];

        for cmd_args in commands {
            let result = crate::cli::BingoCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_sim_rejects_zero_games_via_run() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(
            vec!["bingo", "sim", "--games", "0", "--seed", "1"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
    }
}
