use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Cell};
use crate::rules::{completed_lines, Line};

/// Outcome status of a single mark attempt.
///
/// None of these is an error: all four are ordinary, recoverable results
/// the caller is expected to relay to the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MarkStatus {
    /// The number is on the card and was newly marked.
    Marked,
    /// The number is on the card but was marked earlier. No state change.
    AlreadyMarked,
    /// A well-formed number that is not on this card. No state change.
    NotFound,
    /// Input that is not a well-formed integer. No state change.
    Invalid,
}

/// Combined result of a mark attempt: the status plus every line that is
/// complete after a successful mark.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MarkOutcome {
    pub status: MarkStatus,
    /// Completed lines as of this mark. Only populated on `Marked`; the
    /// other statuses never change the board, so nothing new can complete.
    pub completed: Vec<Line>,
}

impl MarkOutcome {
    fn status_only(status: MarkStatus) -> Self {
        Self {
            status,
            completed: Vec::new(),
        }
    }

    /// Whether this mark left the card with at least one completed line.
    pub fn won(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// The grow-only set of marked values. The free cell is a member from the
/// moment the set is created; there is no unmark operation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MarkState {
    marked: HashSet<Cell>,
}

impl MarkState {
    fn new() -> Self {
        let mut marked = HashSet::new();
        marked.insert(Cell::Free);
        Self { marked }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.marked.contains(&cell)
    }

    pub fn contains_number(&self, number: u8) -> bool {
        self.marked.contains(&Cell::Number(number))
    }

    fn insert(&mut self, cell: Cell) {
        self.marked.insert(cell);
    }

    /// Number of marked values, counting the free cell.
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// The marked numbers (free cell excluded), in no particular order.
    pub fn numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.marked.iter().filter_map(|c| c.number())
    }
}

impl Default for MarkState {
    fn default() -> Self {
        MarkState::new()
    }
}

/// A card in play: the immutable layout plus the evolving mark set.
///
/// The API is synchronous and single-threaded. `mark` is a check-then-insert
/// sequence, so a host feeding it from several threads must serialize access
/// to the whole call with its own lock.
#[derive(Debug, Clone)]
pub struct CardState {
    card: Card,
    marks: MarkState,
}

impl CardState {
    /// Wrap a generated card. The free cell starts out marked.
    pub fn new(card: Card) -> Self {
        Self {
            card,
            marks: MarkState::new(),
        }
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn marks(&self) -> &MarkState {
        &self.marks
    }

    /// Whether the cell at the given position counts as marked.
    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marks.contains(self.card.cell(row, col))
    }

    /// Mark a called number. The only mutating path is a number that is on
    /// the card and not yet marked; that path also runs a win-evaluation
    /// pass whose completed lines ride along on the outcome.
    pub fn mark(&mut self, number: u8) -> MarkOutcome {
        if !self.card.contains(number) {
            return MarkOutcome::status_only(MarkStatus::NotFound);
        }
        if self.marks.contains_number(number) {
            return MarkOutcome::status_only(MarkStatus::AlreadyMarked);
        }
        self.marks.insert(Cell::Number(number));
        MarkOutcome {
            status: MarkStatus::Marked,
            completed: self.evaluate_win(),
        }
    }

    /// Mark from raw text, e.g. a UI input box or a network message.
    ///
    /// Text that does not parse as an integer is `Invalid`; a well-formed
    /// integer outside [1,75] or absent from the card is `NotFound`. The
    /// check lives here so callers do not have to pre-validate.
    pub fn mark_input(&mut self, raw: &str) -> MarkOutcome {
        match raw.trim().parse::<i64>() {
            Err(_) => MarkOutcome::status_only(MarkStatus::Invalid),
            Ok(n) if (1..=75).contains(&n) => self.mark(n as u8),
            Ok(_) => MarkOutcome::status_only(MarkStatus::NotFound),
        }
    }

    /// Every completed line right now. Pure and stateless: safe to call any
    /// number of times, including re-detecting lines reported earlier.
    /// Deduplicating announcements is the caller's concern.
    pub fn evaluate_win(&self) -> Vec<Line> {
        completed_lines(&self.card, &self.marks)
    }
}
