//! clap argument definitions for the bingo CLI.
//!
//! The parser types live here so both the dispatcher in `lib.rs` and the
//! tests can name them without pulling in any command logic.

use clap::{Parser, Subcommand};

/// Top-level argument parser for the `bingo` binary.
#[derive(Parser, Debug)]
#[command(name = "bingo", version, about = "Single-player bingo card engine")]
pub struct BingoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// All CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session on a freshly generated card
    Play {
        /// RNG seed for card generation (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Write the finished session as a JSONL record to this path
        #[arg(long)]
        log: Option<String>,
    },
    /// Generate a card and print it
    Card {
        /// RNG seed for card generation (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate full games and report draws-to-win statistics
    Sim {
        /// Number of games to simulate
        #[arg(long, default_value_t = 1)]
        games: u64,
        /// Base RNG seed (each game uses seed + game index)
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSONL session record per game to this path
        #[arg(long)]
        output: Option<String>,
    },
    /// Display current configuration settings
    Cfg,
    /// Verify RNG properties
    Rng {
        /// Seed for the sample sequence (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
