//! Card grid formatting for terminal display.
//!
//! Pure functions that render a card (and optionally its mark state) as a
//! fixed-width text grid with the B-I-N-G-O header row. Marked numbers are
//! shown in brackets so a session's progress is visible at a glance.

use bingo_engine::cards::{all_columns, Card, Cell, SIDE};
use bingo_engine::game::CardState;

/// Format one cell as a fixed-width (4 column) token.
///
/// - Free cell: `FREE`
/// - Marked number: `[12]`
/// - Unmarked number: ` 12 `
pub fn format_cell(cell: Cell, marked: bool) -> String {
    match cell {
        Cell::Free => "FREE".to_string(),
        Cell::Number(n) if marked => format!("[{:>2}]", n),
        Cell::Number(n) => format!(" {:>2} ", n),
    }
}

/// Render a bare card: header row plus the 5x5 grid, no marks.
pub fn format_card(card: &Card) -> String {
    render(card, |_, _| false)
}

/// Render a card in play, bracketing every marked cell.
pub fn format_card_state(state: &CardState) -> String {
    render(state.card(), |row, col| state.is_marked(row, col))
}

fn render(card: &Card, marked: impl Fn(usize, usize) -> bool) -> String {
    let mut out = String::new();
    let header: Vec<String> = all_columns()
        .into_iter()
        .map(|c| format!("{:^4}", c.to_string()))
        .collect();
    out.push_str(header.join(" ").trim_end());
    out.push('\n');
    for row in 0..SIDE {
        let cells: Vec<String> = (0..SIDE)
            .map(|col| format_cell(card.cell(row, col), marked(row, col)))
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}
