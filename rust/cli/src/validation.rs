//! Input parsing for the interactive play command.
//!
//! Keyword commands (quit, show) are resolved here; everything else is
//! passed through verbatim so the engine's own input validation decides
//! between Marked/AlreadyMarked/NotFound/Invalid. The CLI never
//! pre-validates numbers.

/// Result of parsing one line of play input.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayInput {
    /// A called value, handed as-is to the engine
    Call(String),
    /// Reprint the card grid
    Show,
    /// User wants to exit the session (q or quit)
    Quit,
    /// Blank line; prompt again
    Empty,
}

/// Parse one line of interactive input (case-insensitive keywords).
pub fn parse_play_input(input: &str) -> PlayInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PlayInput::Empty;
    }
    match trimmed.to_lowercase().as_str() {
        "q" | "quit" => PlayInput::Quit,
        "show" => PlayInput::Show,
        _ => PlayInput::Call(trimmed.to_string()),
    }
}
