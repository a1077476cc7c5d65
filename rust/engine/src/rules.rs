use serde::{Deserialize, Serialize};

use crate::cards::{Card, SIDE};
use crate::game::MarkState;

/// One of the 12 winning lines of a card: 5 rows, 5 columns, and the two
/// diagonals. Indices are 0-based; `Display` renders the 1-based form used
/// in player-facing messages.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Main diagonal, (0,0) through (4,4).
    DiagonalMain,
    /// Anti-diagonal, (0,4) through (4,0).
    DiagonalAnti,
}

impl Line {
    /// The five grid positions this line passes through.
    pub fn cells(self) -> [(usize, usize); SIDE] {
        let mut out = [(0usize, 0usize); SIDE];
        for (i, pos) in out.iter_mut().enumerate() {
            *pos = match self {
                Line::Row(r) => (r, i),
                Line::Column(c) => (i, c),
                Line::DiagonalMain => (i, i),
                Line::DiagonalAnti => (i, SIDE - 1 - i),
            };
        }
        out
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "Row {}", r + 1),
            Line::Column(c) => write!(f, "Column {}", c + 1),
            Line::DiagonalMain => write!(f, "Diagonal (TL-BR)"),
            Line::DiagonalAnti => write!(f, "Diagonal (TR-BL)"),
        }
    }
}

/// All 12 lines in evaluation order: rows, columns, then the diagonals.
pub fn all_lines() -> [Line; 12] {
    [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Row(3),
        Line::Row(4),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Column(3),
        Line::Column(4),
        Line::DiagonalMain,
        Line::DiagonalAnti,
    ]
}

/// A line is complete when every cell on it is marked. The free cell is in
/// the mark set from the start, so it satisfies any line through the center.
pub fn is_line_complete(card: &Card, marks: &MarkState, line: Line) -> bool {
    line.cells()
        .into_iter()
        .all(|(row, col)| marks.contains(card.cell(row, col)))
}

/// Every completed line on the card, in [`all_lines`] order. Empty when
/// nothing has been won. Pure: recomputed from scratch on each call.
pub fn completed_lines(card: &Card, marks: &MarkState) -> Vec<Line> {
    all_lines()
        .into_iter()
        .filter(|&line| is_line_complete(card, marks, line))
        .collect()
}
