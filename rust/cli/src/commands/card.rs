//! Card command handler for single card generation and display.
//!
//! Generates one card and prints it with the B-I-N-G-O header row. Supports
//! optional seeding for deterministic layouts.

use crate::error::CliError;
use crate::formatters::format_card;
use bingo_engine::generator::CardGenerator;
use std::io::Write;

/// Handle the card command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic generation
/// * `out` - Output stream for the rendered card
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O errors.
pub fn handle_card_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let card = CardGenerator::new_with_seed(seed).generate();
    writeln!(out, "Seed: {}", seed)?;
    write!(out, "{}", format_card(&card))?;
    Ok(())
}
