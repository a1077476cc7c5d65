//! # Play Command
//!
//! Interactive bingo session on a freshly generated card.
//!
//! The loop reads called values from stdin, hands them to the engine, and
//! renders the updated grid after every successful mark. Each completed
//! line is announced once; because the engine's win evaluation is
//! stateless, the already-announced set lives here in the presentation
//! layer.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use bingo_engine::game::{CardState, MarkStatus};
use bingo_engine::generator::CardGenerator;
use bingo_engine::logger::{MarkEntry, SessionLogger, SessionRecord};
use bingo_engine::rules::Line;

use crate::error::CliError;
use crate::formatters::format_card_state;
use crate::io_utils::read_stdin_line;
use crate::validation::{parse_play_input, PlayInput};

/// Handle the play command: interactive bingo gameplay.
///
/// # Arguments
///
/// * `seed` - RNG seed for card generation (default: random)
/// * `log` - Optional path for the JSONL session record
/// * `out` - Output stream for the grid and mark feedback
/// * `err` - Error stream
/// * `stdin` - Input stream for called values
///
/// # Returns
///
/// * `Ok(())` when the session ends (quit or EOF)
/// * `Err(CliError)` on I/O failure
pub fn handle_play_command(
    seed: Option<u64>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut state = CardState::new(CardGenerator::new_with_seed(seed).generate());

    writeln!(out, "play: seed={}", seed)?;
    write!(out, "{}", format_card_state(&state))?;
    writeln!(
        out,
        "Call a number between 1 and 75 ('show' reprints the card, 'q' quits)."
    )?;

    let mut entries: Vec<MarkEntry> = Vec::new();
    let mut announced: HashSet<Line> = HashSet::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        match parse_play_input(&line) {
            PlayInput::Empty => continue,
            PlayInput::Quit => break,
            PlayInput::Show => {
                write!(out, "{}", format_card_state(&state))?;
            }
            PlayInput::Call(raw) => {
                let outcome = state.mark_input(&raw);
                match outcome.status {
                    MarkStatus::Marked => {
                        writeln!(out, "Marked {}", raw)?;
                        write!(out, "{}", format_card_state(&state))?;
                    }
                    MarkStatus::AlreadyMarked => {
                        writeln!(out, "Number {} already marked.", raw)?;
                    }
                    MarkStatus::NotFound => {
                        writeln!(out, "Number {} is not on this card.", raw)?;
                    }
                    MarkStatus::Invalid => {
                        writeln!(out, "Please enter a whole number between 1 and 75.")?;
                    }
                }
                // session records carry the playable calls
                if let Ok(value) = raw.parse::<u8>() {
                    if (1..=75).contains(&value) {
                        entries.push(MarkEntry {
                            value,
                            status: outcome.status,
                            completed: outcome.completed.clone(),
                        });
                    }
                }
                for completed in &outcome.completed {
                    if announced.insert(*completed) {
                        writeln!(out, "BINGO! {} completed!", completed)?;
                    }
                }
            }
        }
    }

    let winning_lines = state.evaluate_win();
    if winning_lines.is_empty() {
        writeln!(out, "Session over, no bingo this time.")?;
    } else {
        writeln!(out, "Session over with {} winning line(s).", winning_lines.len())?;
    }

    if let Some(path) = log {
        match write_session_record(&path, seed, entries, winning_lines) {
            Ok(id) => writeln!(out, "Session {} written to {}", id, path)?,
            Err(e) => {
                crate::ui::write_error(err, &format!("Failed to write session log: {}", e))?;
                return Err(CliError::Io(e));
            }
        }
    }
    Ok(())
}

fn write_session_record(
    path: &str,
    seed: u64,
    marks: Vec<MarkEntry>,
    winning_lines: Vec<Line>,
) -> std::io::Result<String> {
    let mut logger = SessionLogger::create(path)?;
    let session_id = logger.next_id();
    logger.write(&SessionRecord {
        session_id: session_id.clone(),
        seed: Some(seed),
        marks,
        winning_lines,
        ts: None,
        meta: None,
    })?;
    Ok(session_id)
}
